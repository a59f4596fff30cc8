use clap::ValueEnum;
use impact_simulator::config::{CoastalAmplificationVariant, SafeThresholdVariant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum ThresholdArg {
    Simulator,
    Mission,
    Extended,
}

impl From<ThresholdArg> for SafeThresholdVariant {
    fn from(value: ThresholdArg) -> Self {
        match value {
            ThresholdArg::Simulator => SafeThresholdVariant::Simulator,
            ThresholdArg::Mission => SafeThresholdVariant::Mission,
            ThresholdArg::Extended => SafeThresholdVariant::Extended,
        }
    }
}

#[allow(dead_code)]
#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum AmplificationArg {
    Simulator,
    RunUpLow,
    RunUpHigh,
}

impl From<AmplificationArg> for CoastalAmplificationVariant {
    fn from(value: AmplificationArg) -> Self {
        match value {
            AmplificationArg::Simulator => CoastalAmplificationVariant::Simulator,
            AmplificationArg::RunUpLow => CoastalAmplificationVariant::RunUpLow,
            AmplificationArg::RunUpHigh => CoastalAmplificationVariant::RunUpHigh,
        }
    }
}
