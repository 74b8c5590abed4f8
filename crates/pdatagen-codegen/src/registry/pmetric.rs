//! Metric signal types.

use super::{
    PROTOGEN, instrumentation_scope, resource, schema_url, sort_imports, testing_imports,
    timestamp,
};
use crate::model::{
    Field, ImportLine, MessageStruct, Package, PrimitiveField, SliceStruct, StructDescriptor,
    TypeRef,
};

fn metric_ref(name: &str) -> TypeRef {
    TypeRef::new("pmetric", name)
}

pub(super) fn package() -> Package {
    let resource_metrics = MessageStruct::new("ResourceMetrics", "otlpmetrics.ResourceMetrics")
        .description("ResourceMetrics is a collection of metrics from a Resource.")
        .field(resource())
        .field(schema_url())
        .field(Field::slice("ScopeMetrics", metric_ref("ScopeMetricsSlice")));

    let scope_metrics = MessageStruct::new("ScopeMetrics", "otlpmetrics.ScopeMetrics")
        .description("ScopeMetrics is a collection of metrics from a LibraryInstrumentation.")
        .field(instrumentation_scope())
        .field(schema_url())
        .field(Field::slice("Metrics", metric_ref("MetricSlice")));

    let metric = MessageStruct::new("Metric", "otlpmetrics.Metric")
        .description("Metric represents one metric as a collection of datapoints.\n// See Metric definition in OTLP: https://github.com/open-telemetry/opentelemetry-proto/blob/main/opentelemetry/proto/metrics/v1/metrics.proto")
        .field(PrimitiveField::new("Name", "string").values("\"\"", "\"test_name\""))
        .field(PrimitiveField::new("Description", "string").values("\"\"", "\"test_description\""))
        .field(PrimitiveField::new("Unit", "string").values("\"\"", "\"1\""));

    let number_data_point = MessageStruct::new("NumberDataPoint", "otlpmetrics.NumberDataPoint")
        .description("NumberDataPoint is a single data point in a timeseries that describes the time-varying scalar value of a metric.")
        .field(timestamp("StartTimestamp", "StartTimeUnixNano"))
        .field(timestamp("Timestamp", "TimeUnixNano"))
        .field(Field::slice("Exemplars", metric_ref("ExemplarSlice")));

    let exemplar = MessageStruct::new("Exemplar", "otlpmetrics.Exemplar")
        .description("Exemplar is a sample input double measurement.\n//\n// Exemplars also hold information about the environment when the measurement was recorded,\n// for example the span and trace ID of the active span when the exemplar was recorded.")
        .field(timestamp("Timestamp", "TimeUnixNano"));

    Package::builder("pmetric", "pmetric")
        .imports(sort_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlpmetrics \"{PROTOGEN}/metrics/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .test_imports(testing_imports([
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/internal\""),
            ImportLine::import(format!("otlpmetrics \"{PROTOGEN}/metrics/v1\"")),
            ImportLine::import("\"go.opentelemetry.io/collector/pdata/pcommon\""),
        ]))
        .structures([
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ResourceMetricsSlice", &resource_metrics)),
            StructDescriptor::MessagePtr(resource_metrics),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("ScopeMetricsSlice", &scope_metrics)),
            StructDescriptor::MessagePtr(scope_metrics),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("MetricSlice", &metric)),
            StructDescriptor::MessagePtr(metric),
            StructDescriptor::SliceOfPtrs(SliceStruct::new("NumberDataPointSlice", &number_data_point)),
            StructDescriptor::MessagePtr(number_data_point),
            StructDescriptor::SliceOfValues(SliceStruct::new("ExemplarSlice", &exemplar)),
            StructDescriptor::MessageValue(exemplar),
        ])
        .build()
}
