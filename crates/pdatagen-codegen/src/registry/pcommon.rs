//! Shared common types consumed by every signal package.

use super::{PROTOGEN, testing_imports};
use crate::model::{ImportLine, MessageStruct, Package, PrimitiveField, StructDescriptor};

pub(super) fn package() -> Package {
    Package::builder("pcommon", "pcommon")
        .imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlpcommon \"{PROTOGEN}/common/v1\"")),
            ImportLine::import(format!("otlpresource \"{PROTOGEN}/resource/v1\"")),
        ])
        .test_imports(testing_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlpcommon \"{PROTOGEN}/common/v1\"")),
            ImportLine::import(format!("otlpresource \"{PROTOGEN}/resource/v1\"")),
        ]))
        .structures([
            StructDescriptor::MessageValue(
                MessageStruct::new("Resource", "otlpresource.Resource")
                    .description("Resource is a message representing the resource information.")
                    .field(PrimitiveField::new("DroppedAttributesCount", "uint32").values("0", "17")),
            ),
            StructDescriptor::MessageValue(
                MessageStruct::new("InstrumentationScope", "otlpcommon.InstrumentationScope")
                    .description("InstrumentationScope is a message representing the instrumentation scope information.")
                    .field(PrimitiveField::new("Name", "string").values("\"\"", "\"test_name\""))
                    .field(PrimitiveField::new("Version", "string").values("\"\"", "\"test_version\""))
                    .field(PrimitiveField::new("DroppedAttributesCount", "uint32").values("0", "17")),
            ),
        ])
        .build()
}
