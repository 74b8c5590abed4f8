//! Log signal types.

use super::{
    PROTOGEN, dropped_attributes_count, instrumentation_scope, resource, schema_url, sort_imports,
    testing_imports, timestamp,
};
use crate::model::{
    Field, ImportLine, MessageStruct, Package, PrimitiveField, SliceStruct, StructDescriptor,
    TypeRef,
};

fn log_ref(name: &str) -> TypeRef {
    TypeRef::new("plog", name)
}

pub(super) fn package() -> Package {
    let resource_logs = MessageStruct::new("ResourceLogs", "otlplogs.ResourceLogs")
        .description("ResourceLogs is a collection of logs from a Resource.")
        .field(resource())
        .field(schema_url())
        .field(Field::slice("ScopeLogs", log_ref("ScopeLogsSlice")));

    let scope_logs = MessageStruct::new("ScopeLogs", "otlplogs.ScopeLogs")
        .description("ScopeLogs is a collection of logs from a LibraryInstrumentation.")
        .field(instrumentation_scope())
        .field(schema_url())
        .field(Field::slice("LogRecords", log_ref("LogRecordSlice")));

    let log_record = MessageStruct::new("LogRecord", "otlplogs.LogRecord")
        .description("LogRecord are experimental implementation of OpenTelemetry Log Data Model.")
        .field(timestamp("ObservedTimestamp", "ObservedTimeUnixNano"))
        .field(timestamp("Timestamp", "TimeUnixNano"))
        .field(PrimitiveField::new("SeverityText", "string").values("\"\"", "\"INFO\""))
        .field(dropped_attributes_count());

    Package::builder("plog", "plog")
        .imports(sort_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlplogs \"{PROTOGEN}/logs/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .test_imports(testing_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlplogs \"{PROTOGEN}/logs/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .structures([
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ResourceLogsSlice", &resource_logs)),
            StructDescriptor::MessagePtr(resource_logs),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ScopeLogsSlice", &scope_logs)),
            StructDescriptor::MessagePtr(scope_logs),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("LogRecordSlice", &log_record)),
            StructDescriptor::MessagePtr(log_record),
        ])
        .build()
}
