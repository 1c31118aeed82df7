use crate::config::SelectionCriteria;
use crate::domain::model::{ImageDimensions, Pin};
use crate::domain::ports::ImageInspector;

/// Outcome of the vertical-image criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageCheck {
    Pass,
    Fail,
    /// The image could not be fetched or decoded. Counts as a failure.
    Indeterminate(String),
}

impl ImageCheck {
    pub fn passed(&self) -> bool {
        matches!(self, ImageCheck::Pass)
    }
}

/// Per-criterion result for one pin.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceReport {
    pub keyword_match: bool,
    pub credible_source: bool,
    pub high_engagement: bool,
    /// `None` when the image was not checked because a text criterion already failed.
    pub vertical_image: Option<ImageCheck>,
}

impl RelevanceReport {
    pub fn is_relevant(&self) -> bool {
        self.passes_text_criteria()
            && self
                .vertical_image
                .as_ref()
                .is_some_and(ImageCheck::passed)
    }

    fn passes_text_criteria(&self) -> bool {
        self.keyword_match && self.credible_source && self.high_engagement
    }
}

impl SelectionCriteria {
    /// Case-insensitive substring match of any keyword against title or description.
    pub fn matches_keyword(&self, pin: &Pin) -> bool {
        let title = pin.title().to_lowercase();
        let description = pin.description().to_lowercase();

        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            title.contains(&keyword) || description.contains(&keyword)
        })
    }

    pub fn is_credible_source(&self, pin: &Pin) -> bool {
        let link = pin.link();
        self.trusted_domains
            .iter()
            .any(|domain| link.contains(domain.as_str()))
    }

    pub fn has_high_engagement(&self, pin: &Pin) -> bool {
        pin.saves >= self.min_saves
    }

    /// Taller than wide, but not narrower than `min_aspect_ratio`.
    pub fn check_aspect(&self, dims: ImageDimensions) -> ImageCheck {
        if dims.height == 0 {
            return ImageCheck::Fail;
        }

        let ratio = f64::from(dims.width) / f64::from(dims.height);
        if dims.height > dims.width && ratio >= self.min_aspect_ratio {
            ImageCheck::Pass
        } else {
            ImageCheck::Fail
        }
    }
}

pub struct Selector<I: ImageInspector> {
    criteria: SelectionCriteria,
    inspector: I,
}

impl<I: ImageInspector> Selector<I> {
    pub fn new(criteria: SelectionCriteria, inspector: I) -> Self {
        Self {
            criteria,
            inspector,
        }
    }

    pub fn criteria(&self) -> &SelectionCriteria {
        &self.criteria
    }

    #[cfg(test)]
    pub(crate) fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Fetch failures are logged and reported as `Indeterminate`, never raised.
    pub async fn check_image(&self, pin: &Pin) -> ImageCheck {
        let Some(url) = pin.original_image_url() else {
            tracing::warn!("Image processing failed: pin '{}' has no image url", pin.title());
            return ImageCheck::Indeterminate("missing image url".to_string());
        };

        match self.inspector.dimensions(url).await {
            Ok(dims) => {
                tracing::debug!("Image {} is {}x{}", url, dims.width, dims.height);
                self.criteria.check_aspect(dims)
            }
            Err(e) => {
                tracing::warn!("Image processing failed: {}", e);
                ImageCheck::Indeterminate(e.to_string())
            }
        }
    }

    /// Evaluates the text criteria, and fetches the image only when they all pass.
    pub async fn evaluate(&self, pin: &Pin) -> RelevanceReport {
        let mut report = self.text_report(pin);
        if report.passes_text_criteria() {
            report.vertical_image = Some(self.check_image(pin).await);
        }
        report
    }

    /// Like [`evaluate`](Self::evaluate) but always checks the image.
    pub async fn evaluate_fully(&self, pin: &Pin) -> RelevanceReport {
        let mut report = self.text_report(pin);
        report.vertical_image = Some(self.check_image(pin).await);
        report
    }

    pub async fn is_relevant(&self, pin: &Pin) -> bool {
        self.evaluate(pin).await.is_relevant()
    }

    /// Keeps the relevant pins in feed order.
    pub async fn filter_relevant(&self, pins: Vec<Pin>) -> Vec<Pin> {
        let mut relevant = Vec::new();
        for pin in pins {
            if self.is_relevant(&pin).await {
                relevant.push(pin);
            }
        }
        relevant
    }

    /// The relevant pin with the most saves; the earliest one wins a tie.
    pub async fn choose_top_pin(&self, pins: Vec<Pin>) -> Option<Pin> {
        let relevant = self.filter_relevant(pins).await;
        tracing::debug!("{} relevant pins", relevant.len());
        rank_by_saves(relevant).into_iter().next()
    }

    fn text_report(&self, pin: &Pin) -> RelevanceReport {
        RelevanceReport {
            keyword_match: self.criteria.matches_keyword(pin),
            credible_source: self.criteria.is_credible_source(pin),
            high_engagement: self.criteria.has_high_engagement(pin),
            vertical_image: None,
        }
    }
}

/// Stable sort by saves, highest first.
pub fn rank_by_saves(mut pins: Vec<Pin>) -> Vec<Pin> {
    pins.sort_by(|a, b| b.saves.cmp(&a.saves));
    pins
}
