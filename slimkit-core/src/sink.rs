//! Presentation side of an audit

use crate::asset::{AudioRecord, ModelRecord, TextureRecord};
use crate::platform::{PlatformGroup, PlatformSetting};
use crate::size::SizeReport;

/// Receives the results of analyzer passes for presentation.
///
/// Each call hands over a complete result set that replaces anything the sink
/// received earlier for the same report.
pub trait ReportSink {
    type Error;

    fn texture_report(&mut self, records: &[TextureRecord]) -> Result<(), Self::Error>;
    fn audio_report(&mut self, records: &[AudioRecord]) -> Result<(), Self::Error>;
    fn model_report(&mut self, records: &[ModelRecord]) -> Result<(), Self::Error>;
    fn size_report(&mut self, report: &SizeReport) -> Result<(), Self::Error>;
    fn platform_report(
        &mut self,
        group: PlatformGroup,
        settings: &[PlatformSetting],
    ) -> Result<(), Self::Error>;
}
