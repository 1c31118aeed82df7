use crate::core::selector::Selector;
use crate::domain::ports::{BoardPublisher, ImageInspector, PinSource};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    NoPinsFound,
    NoRelevantPins,
    DryRun { title: String },
    Published { title: String, pin_id: Option<String> },
}

/// fetch → select → publish, once.
pub struct CurationEngine<S, I, P>
where
    S: PinSource,
    I: ImageInspector,
    P: BoardPublisher,
{
    source: S,
    selector: Selector<I>,
    publisher: P,
    dry_run: bool,
    monitor: RunMonitor,
}

impl<S, I, P> CurationEngine<S, I, P>
where
    S: PinSource,
    I: ImageInspector,
    P: BoardPublisher,
{
    pub fn new(source: S, selector: Selector<I>, publisher: P) -> Self {
        Self {
            source,
            selector,
            publisher,
            dry_run: false,
            monitor: RunMonitor::default(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor = RunMonitor::new(enabled);
        self
    }

    pub async fn run(&mut self) -> Result<RunOutcome> {
        tracing::info!("Starting curation run");

        let pins = self.source.fetch_pins().await?;
        self.monitor.log_phase("fetch");

        if pins.is_empty() {
            tracing::info!("No pins found.");
            return Ok(RunOutcome::NoPinsFound);
        }

        let top_pin = self.selector.choose_top_pin(pins).await;
        self.monitor.log_phase("select");

        let Some(top_pin) = top_pin else {
            tracing::info!("No relevant pins found.");
            return Ok(RunOutcome::NoRelevantPins);
        };

        let title = top_pin.title().to_string();
        tracing::info!("Top pin selected: {} ({} saves)", title, top_pin.saves);

        if self.dry_run {
            tracing::info!("Dry run: skipping publish of '{}'", title);
            return Ok(RunOutcome::DryRun { title });
        }

        let published = self.publisher.publish(&top_pin).await?;
        self.monitor.log_phase("publish");

        Ok(RunOutcome::Published {
            title,
            pin_id: published.id,
        })
    }
}
