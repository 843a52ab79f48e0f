use keyphrase_core::{analyze, AnalysisReport};
use serde::{Deserialize, Serialize};

use crate::page::PageSignals;

/// Page signals plus the phrase analysis run over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    #[serde(flatten)]
    pub signals: PageSignals,
    #[serde(flatten)]
    pub analysis: AnalysisReport,
}

impl PageReport {
    pub fn build(signals: PageSignals) -> Self {
        let analysis = analyze(&signals.analysis_input());
        Self { signals, analysis }
    }
}
