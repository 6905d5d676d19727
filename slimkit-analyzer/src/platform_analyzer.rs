//! Platform build setting classification
//!
//! Settings with a universally good value get a verdict. Scripting backend,
//! color space, exception support and stripping level depend on the project's
//! tradeoffs and are reported as informational only.

use slimkit_core::platform::{
    color_space_label, exception_support_label, scripting_backend_label, stripping_level_label,
    vsync_label, WebGlCompression,
};
use slimkit_core::{
    BuildTarget, PlatformGroup, PlatformSetting, PlatformSettingsProvider, SettingId, Verdict,
};

/// Classifies platform settings read from a provider
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformSettingsAnalyzer;

impl PlatformSettingsAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Settings reported for a group, in display order
    pub fn analyze<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
        group: PlatformGroup,
    ) -> Vec<PlatformSetting> {
        match group {
            PlatformGroup::Mobile => vec![
                self.incremental_gc(provider),
                self.scripting_backend(provider, BuildTarget::Android),
                self.scripting_backend(provider, BuildTarget::Ios),
                self.color_space(provider),
                self.vsync(provider),
            ],
            PlatformGroup::WebGl => vec![
                self.webgl_compression(provider),
                self.webgl_name_files_as_hashes(provider),
                self.exception_support(provider),
                self.managed_stripping(provider, BuildTarget::WebGl),
                self.color_space(provider),
                self.vsync(provider),
            ],
        }
    }

    /// Incremental GC is good when enabled
    pub fn incremental_gc<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> PlatformSetting {
        let enabled = provider.incremental_gc();
        PlatformSetting::new(
            SettingId::IncrementalGc,
            enabled_label(enabled),
            Verdict::from_bool(enabled),
        )
    }

    /// VSync is good only when set to "Don't Sync"
    pub fn vsync<P: PlatformSettingsProvider + ?Sized>(&self, provider: &P) -> PlatformSetting {
        let count = provider.vsync_count();
        PlatformSetting::new(SettingId::VSync, vsync_label(count), Verdict::from_bool(count == 0))
    }

    /// WebGL compression is good only when Brotli
    pub fn webgl_compression<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> PlatformSetting {
        let format = WebGlCompression::from_code(provider.webgl_compression_format());
        PlatformSetting::new(
            SettingId::WebGlCompression,
            format.label(),
            Verdict::from_bool(format == WebGlCompression::Brotli),
        )
    }

    /// Hashed file names are good when enabled
    pub fn webgl_name_files_as_hashes<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> PlatformSetting {
        let enabled = provider.webgl_name_files_as_hashes();
        PlatformSetting::new(
            SettingId::WebGlNameFilesAsHashes,
            enabled_label(enabled),
            Verdict::from_bool(enabled),
        )
    }

    pub fn scripting_backend<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
        target: BuildTarget,
    ) -> PlatformSetting {
        PlatformSetting::informational(
            SettingId::ScriptingBackend(target),
            scripting_backend_label(provider.scripting_backend(target)),
        )
    }

    pub fn color_space<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> PlatformSetting {
        PlatformSetting::informational(
            SettingId::ColorSpace,
            color_space_label(provider.color_space()),
        )
    }

    pub fn exception_support<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> PlatformSetting {
        PlatformSetting::informational(
            SettingId::WebGlExceptionSupport,
            exception_support_label(provider.webgl_exception_support()),
        )
    }

    pub fn managed_stripping<P: PlatformSettingsProvider + ?Sized>(
        &self,
        provider: &P,
        target: BuildTarget,
    ) -> PlatformSetting {
        PlatformSetting::informational(
            SettingId::ManagedStripping(target),
            stripping_level_label(provider.managed_stripping_level(target)),
        )
    }
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimkit_core::StaticPlatformSettings;

    fn verdict_of(settings: &[PlatformSetting], id: SettingId) -> Verdict {
        settings
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.verdict)
            .unwrap()
    }

    #[test]
    fn test_incremental_gc_verdict() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let mut settings = StaticPlatformSettings::default();

        settings.incremental_gc = false;
        assert_eq!(analyzer.incremental_gc(&settings).verdict, Verdict::Bad);

        settings.incremental_gc = true;
        let setting = analyzer.incremental_gc(&settings);
        assert_eq!(setting.verdict, Verdict::Good);
        assert_eq!(setting.raw_value, "Enabled");
    }

    #[test]
    fn test_vsync_verdicts() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let mut settings = StaticPlatformSettings::default();

        settings.vsync_count = 0;
        let setting = analyzer.vsync(&settings);
        assert_eq!(setting.verdict, Verdict::Good);
        assert_eq!(setting.raw_value, "Don't Sync");

        settings.vsync_count = 1;
        assert_eq!(analyzer.vsync(&settings).verdict, Verdict::Bad);

        settings.vsync_count = 2;
        assert_eq!(analyzer.vsync(&settings).verdict, Verdict::Bad);

        settings.vsync_count = 4;
        let setting = analyzer.vsync(&settings);
        assert_eq!(setting.verdict, Verdict::Bad);
        assert_eq!(setting.raw_value, "Unknown");
    }

    #[test]
    fn test_webgl_compression_verdicts() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let mut settings = StaticPlatformSettings::default();

        settings.webgl_compression_format = 0;
        let setting = analyzer.webgl_compression(&settings);
        assert_eq!(setting.verdict, Verdict::Good);
        assert_eq!(setting.raw_value, "Brotli");

        for code in [1, 2, 9] {
            settings.webgl_compression_format = code;
            assert_eq!(analyzer.webgl_compression(&settings).verdict, Verdict::Bad);
        }
    }

    #[test]
    fn test_name_files_as_hashes_verdict() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let mut settings = StaticPlatformSettings::default();

        assert_eq!(analyzer.webgl_name_files_as_hashes(&settings).verdict, Verdict::Bad);
        settings.webgl_name_files_as_hashes = true;
        assert_eq!(analyzer.webgl_name_files_as_hashes(&settings).verdict, Verdict::Good);
    }

    #[test]
    fn test_tradeoff_settings_are_informational() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let mut settings = StaticPlatformSettings::default();
        settings.scripting_backends.insert(BuildTarget::Ios, 1);
        settings.stripping_levels.insert(BuildTarget::WebGl, 3);
        settings.color_space = 1;

        let mobile = analyzer.analyze(&settings, PlatformGroup::Mobile);
        let webgl = analyzer.analyze(&settings, PlatformGroup::WebGl);

        for id in [
            SettingId::ScriptingBackend(BuildTarget::Android),
            SettingId::ScriptingBackend(BuildTarget::Ios),
            SettingId::ColorSpace,
        ] {
            assert_eq!(verdict_of(&mobile, id), Verdict::Neutral);
        }
        for id in [
            SettingId::WebGlExceptionSupport,
            SettingId::ManagedStripping(BuildTarget::WebGl),
            SettingId::ColorSpace,
        ] {
            assert_eq!(verdict_of(&webgl, id), Verdict::Neutral);
        }

        let ios = mobile
            .iter()
            .find(|s| s.id == SettingId::ScriptingBackend(BuildTarget::Ios))
            .unwrap();
        assert_eq!(ios.raw_value, "IL2CPP");
        let stripping = webgl
            .iter()
            .find(|s| s.id == SettingId::ManagedStripping(BuildTarget::WebGl))
            .unwrap();
        assert_eq!(stripping.raw_value, "High");
    }

    #[test]
    fn test_group_contents() {
        let analyzer = PlatformSettingsAnalyzer::new();
        let settings = StaticPlatformSettings::default();

        let mobile: Vec<&str> = analyzer
            .analyze(&settings, PlatformGroup::Mobile)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            mobile,
            vec![
                "Incremental GC",
                "Scripting Backend (Android)",
                "Scripting Backend (iOS)",
                "Color Space",
                "VSync"
            ]
        );
        assert_eq!(analyzer.analyze(&settings, PlatformGroup::WebGl).len(), 6);
    }
}
