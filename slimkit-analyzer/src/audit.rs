//! Full project audit: every analyzer pass in one report

use crate::{
    AnalyzerConfig, AudioAnalyzer, ModelAnalyzer, PlatformSettingsAnalyzer, SizeAggregator,
    TextureAnalyzer,
};
use slimkit_core::{
    AssetCatalogSource, AssetRecord, AudioRecord, ModelRecord, PlatformGroup, PlatformSetting,
    PlatformSettingsProvider, ReportSink, SizeReport, TextureRecord,
};

/// Results of one complete audit
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuditReport {
    pub textures: Vec<TextureRecord>,
    pub audio: Vec<AudioRecord>,
    pub models: Vec<ModelRecord>,
    pub sizes: SizeReport,
    pub mobile: Vec<PlatformSetting>,
    pub webgl: Vec<PlatformSetting>,
}

impl AuditReport {
    /// Every asset record of the report, textures first
    pub fn asset_records(&self) -> Vec<AssetRecord> {
        let textures = self.textures.iter().cloned().map(AssetRecord::Texture);
        let audio = self.audio.iter().cloned().map(AssetRecord::Audio);
        let models = self.models.iter().cloned().map(AssetRecord::Model);
        textures.chain(audio).chain(models).collect()
    }

    /// Number of asset records with at least one non-ideal rule
    pub fn issue_count(&self) -> usize {
        self.asset_records().iter().filter(|r| r.has_issues()).count()
    }

    /// Hands every section of the report to a sink
    pub fn deliver<K: ReportSink + ?Sized>(&self, sink: &mut K) -> Result<(), K::Error> {
        sink.texture_report(&self.textures)?;
        sink.audio_report(&self.audio)?;
        sink.model_report(&self.models)?;
        sink.size_report(&self.sizes)?;
        sink.platform_report(PlatformGroup::Mobile, &self.mobile)?;
        sink.platform_report(PlatformGroup::WebGl, &self.webgl)?;
        Ok(())
    }
}

/// Runs every analyzer against a project
pub struct ProjectAudit {
    config: AnalyzerConfig,
}

impl ProjectAudit {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn run<S, P>(&self, source: &S, settings: &P) -> AuditReport
    where
        S: AssetCatalogSource + ?Sized,
        P: PlatformSettingsProvider + ?Sized,
    {
        let platform = PlatformSettingsAnalyzer::new();

        AuditReport {
            textures: TextureAnalyzer::new(self.config.clone()).analyze(source),
            audio: AudioAnalyzer::new(self.config.clone()).analyze(source),
            models: ModelAnalyzer::new(self.config.clone()).analyze(source),
            sizes: SizeAggregator::new(self.config.clone()).aggregate(source),
            mobile: platform.analyze(settings, PlatformGroup::Mobile),
            webgl: platform.analyze(settings, PlatformGroup::WebGl),
        }
    }
}
