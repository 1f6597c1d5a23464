// Domain models

mod container;
mod metrics;

pub use container::{
    BlkioEntry, BlkioOp, ContainerDescriptor, CpuSample, InterfaceSample, MemorySample,
    RawStatsSample,
};
pub use metrics::{
    CollectorResult, DerivedMetrics, LabelSchema, MetricFamily, MetricKind, MetricRow,
    MetricValue,
};
