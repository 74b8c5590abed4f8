//! OTLP export request/response packages, one per signal.
//!
//! Each declares the `ExportPartialSuccess` message returned when a
//! receiver accepted only part of an export request.

use super::{PROTOGEN, testing_imports};
use crate::model::{ImportLine, MessageStruct, Package, PrimitiveField, StructDescriptor};

fn export_partial_success(
    name: &str,
    path: &str,
    alias: &str,
    proto_dir: &str,
    orig_name: &str,
    rejected: &str,
) -> Package {
    let import = ImportLine::import(format!("{alias} \"{PROTOGEN}/collector/{proto_dir}\""));

    Package::builder(name, path)
        .import(import.clone())
        .test_imports(testing_imports([import]))
        .structure(StructDescriptor::MessageValue(
            MessageStruct::new("ExportPartialSuccess", format!("{alias}.{orig_name}"))
                .description("ExportPartialSuccess represents the details of a partially successful export request.")
                .field(PrimitiveField::new(rejected, "int64").values("0", "13"))
                .field(PrimitiveField::new("ErrorMessage", "string").values("\"\"", "\"error message\"")),
        ))
        .build()
}

pub(super) fn plogotlp() -> Package {
    export_partial_success(
        "plogotlp",
        "plog/plogotlp",
        "otlpcollectorlog",
        "logs/v1",
        "ExportLogsPartialSuccess",
        "RejectedLogRecords",
    )
}

pub(super) fn pmetricotlp() -> Package {
    export_partial_success(
        "pmetricotlp",
        "pmetric/pmetricotlp",
        "otlpcollectormetrics",
        "metrics/v1",
        "ExportMetricsPartialSuccess",
        "RejectedDataPoints",
    )
}

pub(super) fn ptraceotlp() -> Package {
    export_partial_success(
        "ptraceotlp",
        "ptrace/ptraceotlp",
        "otlpcollectortrace",
        "trace/v1",
        "ExportTracePartialSuccess",
        "RejectedSpans",
    )
}
