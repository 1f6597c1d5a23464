// Derived statistics from a raw stats sample.
// CPU math follows the docker CLI (cli/command/container/stats_helpers.go).

use crate::models::{BlkioOp, CpuSample, DerivedMetrics, MemorySample, RawStatsSample};

const RATIO_SCALE: u128 = 10_000;

/// `num / den` rounded half-up to 4 decimal places, computed in integers so
/// ties round exactly. Returns 0.0 when `den` is 0.
pub fn ratio_half_up(num: u64, den: u64) -> f64 {
    if den == 0 {
        return 0.0;
    }
    let (num, den) = (num as u128, den as u128);
    let scaled = (num * RATIO_SCALE * 2 + den) / (den * 2);
    scaled as f64 / RATIO_SCALE as f64
}

pub fn mem_usage_ratio(mem: &MemorySample) -> f64 {
    ratio_half_up(mem.usage, mem.limit)
}

/// Percentage of host CPU used since the previous read, scaled by core count
/// (so a container saturating 2 cores reports 200.0).
pub fn cpu_percent(cpu: &CpuSample) -> f64 {
    let cpu_delta = cpu.total_usage.saturating_sub(cpu.prev_total_usage);
    let system_delta = cpu.system_usage.saturating_sub(cpu.prev_system_usage);
    if cpu_delta == 0 || system_delta == 0 {
        return 0.0;
    }
    ratio_half_up(cpu_delta, system_delta) * cpu.online_cpus as f64 * 100.0
}

pub fn derive(sample: &RawStatsSample) -> DerivedMetrics {
    let (rx_bytes, tx_bytes) = sample
        .networks
        .iter()
        .fold((0u64, 0u64), |(rx, tx), i| {
            (rx.saturating_add(i.rx_bytes), tx.saturating_add(i.tx_bytes))
        });

    let mut blk_read = 0u64;
    let mut blk_write = 0u64;
    for e in &sample.blkio {
        match e.op {
            BlkioOp::Read => blk_read = blk_read.saturating_add(e.value),
            BlkioOp::Write => blk_write = blk_write.saturating_add(e.value),
            BlkioOp::Other(_) => {}
        }
    }

    DerivedMetrics {
        mem_limit: sample.memory.limit,
        mem_used: sample.memory.usage,
        mem_usage_ratio: mem_usage_ratio(&sample.memory),
        cpu_percent: cpu_percent(&sample.cpu),
        rx_bytes,
        tx_bytes,
        blk_read,
        blk_write,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlkioEntry, InterfaceSample};

    fn cpu(total: u64, prev_total: u64, system: u64, prev_system: u64, cores: u64) -> CpuSample {
        CpuSample {
            total_usage: total,
            system_usage: system,
            prev_total_usage: prev_total,
            prev_system_usage: prev_system,
            online_cpus: cores,
        }
    }

    #[test]
    fn mem_ratio_half_of_limit_is_exact() {
        let mem = MemorySample {
            limit: 1024,
            usage: 512,
        };
        assert_eq!(mem_usage_ratio(&mem), 0.5);
    }

    #[test]
    fn ratio_rounds_ties_up() {
        // 1/8 = 0.125 exactly; 1/3 = 0.33333..; 2/3 = 0.66666..
        assert_eq!(ratio_half_up(1, 8), 0.125);
        assert_eq!(ratio_half_up(1, 3), 0.3333);
        assert_eq!(ratio_half_up(2, 3), 0.6667);
        // 0.00005 is the tie at the 4th decimal
        assert_eq!(ratio_half_up(5, 100_000), 0.0001);
        assert_eq!(ratio_half_up(4, 100_000), 0.0);
    }

    #[test]
    fn ratio_with_zero_limit_is_zero() {
        assert_eq!(ratio_half_up(512, 0), 0.0);
    }

    #[test]
    fn ratio_handles_u64_extremes() {
        assert_eq!(ratio_half_up(u64::MAX, u64::MAX), 1.0);
    }

    #[test]
    fn cpu_percent_scales_by_cores() {
        assert_eq!(cpu_percent(&cpu(200, 100, 1100, 1000, 2)), 200.0);
    }

    #[test]
    fn cpu_percent_rounds_ratio_before_scaling() {
        // 1/3 -> 0.3333 -> 0.3333 * 4 * 100
        let got = cpu_percent(&cpu(101, 100, 1003, 1000, 4));
        assert!((got - 133.32).abs() < 1e-9, "got {got}");
    }

    #[test]
    fn cpu_percent_is_zero_without_positive_deltas() {
        assert_eq!(cpu_percent(&cpu(200, 100, 1000, 1000, 2)), 0.0);
        assert_eq!(cpu_percent(&cpu(100, 100, 1100, 1000, 2)), 0.0);
        assert_eq!(cpu_percent(&cpu(50, 100, 1100, 1000, 2)), 0.0);
        assert_eq!(cpu_percent(&cpu(200, 100, 900, 1000, 2)), 0.0);
    }

    #[test]
    fn derive_sums_interfaces_and_tagged_blkio() {
        let sample = RawStatsSample {
            memory: MemorySample {
                limit: 1000,
                usage: 250,
            },
            cpu: cpu(0, 0, 0, 0, 1),
            networks: vec![
                InterfaceSample {
                    name: "eth0".into(),
                    rx_bytes: 100,
                    tx_bytes: 10,
                },
                InterfaceSample {
                    name: "eth1".into(),
                    rx_bytes: 23,
                    tx_bytes: 7,
                },
            ],
            blkio: vec![
                BlkioEntry {
                    op: BlkioOp::Read,
                    value: 4096,
                },
                BlkioEntry {
                    op: BlkioOp::Read,
                    value: 1024,
                },
                BlkioEntry {
                    op: BlkioOp::Write,
                    value: 512,
                },
                BlkioEntry {
                    op: BlkioOp::Other("Sync".into()),
                    value: 99_999,
                },
            ],
        };
        let d = derive(&sample);
        assert_eq!(d.mem_limit, 1000);
        assert_eq!(d.mem_used, 250);
        assert_eq!(d.mem_usage_ratio, 0.25);
        assert_eq!(d.cpu_percent, 0.0);
        assert_eq!((d.rx_bytes, d.tx_bytes), (123, 17));
        assert_eq!((d.blk_read, d.blk_write), (5120, 512));
    }

    #[test]
    fn derive_defaults_to_zero_without_networks_or_blkio() {
        let d = derive(&RawStatsSample::default());
        assert_eq!((d.rx_bytes, d.tx_bytes, d.blk_read, d.blk_write), (0, 0, 0, 0));
        assert_eq!(d.mem_usage_ratio, 0.0);
    }
}
