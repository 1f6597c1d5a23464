// Prometheus text exposition of a scrape snapshot.
// Families are registered into a registry that lives only for this call.

use crate::models::{MetricFamily, MetricKind};
use prometheus::{Encoder, GaugeVec, IntCounterVec, Opts, Registry, TextEncoder};

pub fn render_text(families: &[MetricFamily]) -> Result<String, prometheus::Error> {
    let registry = Registry::new();

    for family in families {
        let opts = Opts::new(family.name.as_str(), family.help.as_str());
        let label_names: Vec<&str> = family.label_names.iter().map(String::as_str).collect();

        match family.kind {
            MetricKind::Gauge => {
                let vec = GaugeVec::new(opts, &label_names)?;
                for row in &family.rows {
                    let values: Vec<&str> = row.label_values.iter().map(String::as_str).collect();
                    vec.get_metric_with_label_values(&values)?.set(row.value.as_f64());
                }
                registry.register(Box::new(vec))?;
            }
            MetricKind::Counter => {
                let vec = IntCounterVec::new(opts, &label_names)?;
                for row in &family.rows {
                    let values: Vec<&str> = row.label_values.iter().map(String::as_str).collect();
                    // Fresh counter per scrape, so inc_by sets the absolute total.
                    vec.get_metric_with_label_values(&values)?
                        .inc_by(row.value.as_u64());
                }
                registry.register(Box::new(vec))?;
            }
        }
    }

    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf)?;
    String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
