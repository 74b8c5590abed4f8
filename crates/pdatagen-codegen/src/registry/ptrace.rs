//! Trace signal types.

use super::{
    PROTOGEN, dropped_attributes_count, instrumentation_scope, resource, schema_url, sort_imports,
    testing_imports, timestamp,
};
use crate::model::{
    Field, ImportLine, MessageStruct, Package, PrimitiveField, SliceStruct, StructDescriptor,
    TypeRef,
};

fn trace_ref(name: &str) -> TypeRef {
    TypeRef::new("ptrace", name)
}

pub(super) fn package() -> Package {
    let resource_spans = MessageStruct::new("ResourceSpans", "otlptrace.ResourceSpans")
        .description("ResourceSpans is a collection of spans from a Resource.")
        .field(resource())
        .field(schema_url())
        .field(Field::slice("ScopeSpans", trace_ref("ScopeSpansSlice")));

    let scope_spans = MessageStruct::new("ScopeSpans", "otlptrace.ScopeSpans")
        .description("ScopeSpans is a collection of spans from a LibraryInstrumentation.")
        .field(instrumentation_scope())
        .field(schema_url())
        .field(Field::slice("Spans", trace_ref("SpanSlice")));

    let span = MessageStruct::new("Span", "otlptrace.Span")
        .description("Span represents a single operation within a trace.")
        .field(PrimitiveField::new("TraceState", "string").values("\"\"", "\"congo=congos\""))
        .field(PrimitiveField::new("Name", "string").values("\"\"", "\"test_name\""))
        .field(timestamp("StartTimestamp", "StartTimeUnixNano"))
        .field(timestamp("EndTimestamp", "EndTimeUnixNano"))
        .field(dropped_attributes_count())
        .field(Field::slice("Events", trace_ref("SpanEventSlice")))
        .field(PrimitiveField::new("DroppedEventsCount", "uint32").values("0", "17"))
        .field(PrimitiveField::new("DroppedLinksCount", "uint32").values("0", "17"))
        .field(Field::message("Status", trace_ref("Status")));

    let span_event = MessageStruct::new("SpanEvent", "otlptrace.Span_Event")
        .description("SpanEvent is a time-stamped annotation of the span, consisting of user-supplied\n// text description and key-value pairs. See OTLP for event definition.")
        .field(timestamp("Timestamp", "TimeUnixNano"))
        .field(PrimitiveField::new("Name", "string").values("\"\"", "\"test_name\""))
        .field(dropped_attributes_count());

    let status = MessageStruct::new("Status", "otlptrace.Status")
        .description("Status is an optional final status for this span. Semantically, when Status was not\n// set, that means the span ended without errors and to assume Status.Ok (code = 0).")
        .field(PrimitiveField::new("Message", "string").values("\"\"", "\"cancelled\""));

    Package::builder("ptrace", "ptrace")
        .imports(sort_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlptrace \"{PROTOGEN}/trace/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .test_imports(testing_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlptrace \"{PROTOGEN}/trace/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .structures([
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ResourceSpansSlice", &resource_spans)),
            StructDescriptor::MessagePtr(resource_spans),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ScopeSpansSlice", &scope_spans)),
            StructDescriptor::MessagePtr(scope_spans),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("SpanSlice", &span)),
            StructDescriptor::MessagePtr(span),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("SpanEventSlice", &span_event)),
            StructDescriptor::MessagePtr(span_event),
            StructDescriptor::MessageValue(status),
        ])
        .build()
}
