//! Crop dialog state machine.
//!
//! ```text
//! Idle --load--> ImageLoaded --displayed--> Cropping --apply--> Processing
//!  ^                 |                         |                   |
//!  +------cancel-----+----------cancel---------+----take (done)----+
//! ```

use super::crop::CropGeometry;
use super::data_url;
use super::selection::CropSelection;
use crate::config::CropSettings;
use crate::error::CropError;

/// Bytes of an accepted upload waiting to be cropped.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Data URI shown inside the crop dialog.
    pub preview_url: String,
}

impl PendingUpload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = mime_type.into();
        let preview_url = data_url(&mime_type, &bytes);
        Self {
            mime_type,
            bytes,
            preview_url,
        }
    }
}

/// Everything the transformer needs once the user pressed apply.
#[derive(Debug, Clone, PartialEq)]
pub struct CropJob {
    pub upload: PendingUpload,
    pub geometry: CropGeometry,
    pub selection: CropSelection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CropSession {
    #[default]
    Idle,
    /// Bytes are read; waiting for the dialog to report the displayed size.
    ImageLoaded { upload: PendingUpload },
    Cropping {
        upload: PendingUpload,
        geometry: CropGeometry,
        selection: CropSelection,
    },
    /// Apply was pressed; the job runs once and the session returns to idle.
    Processing(CropJob),
}

impl CropSession {
    pub fn state_name(&self) -> &'static str {
        match self {
            CropSession::Idle => "idle",
            CropSession::ImageLoaded { .. } => "image-loaded",
            CropSession::Cropping { .. } => "cropping",
            CropSession::Processing(_) => "processing",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, CropSession::Idle)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, CropSession::Processing(_))
    }

    pub fn upload(&self) -> Option<&PendingUpload> {
        match self {
            CropSession::Idle => None,
            CropSession::ImageLoaded { upload } | CropSession::Cropping { upload, .. } => {
                Some(upload)
            }
            CropSession::Processing(job) => Some(&job.upload),
        }
    }

    pub fn selection(&self) -> Option<(&CropGeometry, &CropSelection)> {
        match self {
            CropSession::Cropping {
                geometry, selection, ..
            } => Some((geometry, selection)),
            CropSession::Processing(job) => Some((&job.geometry, &job.selection)),
            _ => None,
        }
    }

    /// Opens the dialog on a new upload, discarding any pending one.
    pub fn load(&mut self, upload: PendingUpload) -> Result<(), CropError> {
        if self.is_processing() {
            return Err(CropError::Busy);
        }
        let from = self.state_name();
        self.transition(from, CropSession::ImageLoaded { upload });
        Ok(())
    }

    /// Called once the image is laid out in the dialog.
    pub fn image_displayed(&mut self, geometry: CropGeometry, settings: &CropSettings) {
        if !matches!(self, CropSession::ImageLoaded { .. }) {
            log::debug!("image_displayed ignored in state {}", self.state_name());
            return;
        }
        let CropSession::ImageLoaded { upload } = std::mem::take(self) else {
            return;
        };
        let selection =
            CropSelection::initial(geometry.displayed, settings.initial_selection_ratio);
        self.transition("image-loaded", CropSession::Cropping {
            upload,
            geometry,
            selection,
        });
    }

    pub fn move_selection(&mut self, dx: f64, dy: f64) {
        if let CropSession::Cropping {
            geometry, selection, ..
        } = self
        {
            *selection = selection.moved_by(dx, dy, geometry.displayed);
        }
    }

    pub fn resize_selection(&mut self, size: f64, settings: &CropSettings) {
        if let CropSession::Cropping {
            geometry, selection, ..
        } = self
        {
            *selection = selection.resized_to(size, geometry.displayed, settings.min_selection);
        }
    }

    /// Cropping -> Processing. Refuses a second apply while one is running.
    pub fn begin_apply(&mut self) -> Result<(), CropError> {
        match std::mem::take(self) {
            CropSession::Cropping {
                upload,
                geometry,
                selection,
            } => {
                self.transition("cropping", CropSession::Processing(CropJob {
                    upload,
                    geometry,
                    selection,
                }));
                Ok(())
            }
            CropSession::Processing(job) => {
                *self = CropSession::Processing(job);
                Err(CropError::Busy)
            }
            CropSession::ImageLoaded { upload } => {
                *self = CropSession::ImageLoaded { upload };
                Err(CropError::EmptyCrop)
            }
            CropSession::Idle => Err(CropError::MissingSource),
        }
    }

    /// Processing -> Idle, handing out the job to run.
    pub fn take_job(&mut self) -> Option<CropJob> {
        match std::mem::take(self) {
            CropSession::Processing(job) => {
                log::debug!("crop session: processing -> idle");
                Some(job)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Back to idle from any state; nothing outside the session changes.
    pub fn cancel(&mut self) {
        if self.is_open() {
            let from = self.state_name();
            self.transition(from, CropSession::Idle);
        }
    }

    fn transition(&mut self, from: &'static str, next: CropSession) {
        log::debug!("crop session: {} -> {}", from, next.state_name());
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::Size;

    fn upload() -> PendingUpload {
        PendingUpload::new("image/png", vec![1, 2, 3])
    }

    fn geometry() -> CropGeometry {
        CropGeometry {
            natural: Size::new(800.0, 600.0),
            displayed: Size::new(400.0, 300.0),
        }
    }

    #[test]
    fn walks_the_happy_path() {
        let settings = CropSettings::default();
        let mut session = CropSession::default();
        session.load(upload()).unwrap();
        assert_eq!(session.state_name(), "image-loaded");

        session.image_displayed(geometry(), &settings);
        assert_eq!(session.state_name(), "cropping");

        session.begin_apply().unwrap();
        assert!(session.is_processing());

        let job = session.take_job().unwrap();
        assert_eq!(job.upload, upload());
        assert_eq!(session, CropSession::Idle);
    }

    #[test]
    fn apply_is_not_reentrant() {
        let mut session = CropSession::default();
        session.load(upload()).unwrap();
        session.image_displayed(geometry(), &CropSettings::default());
        session.begin_apply().unwrap();

        assert!(matches!(session.begin_apply(), Err(CropError::Busy)));
        assert!(matches!(session.load(upload()), Err(CropError::Busy)));
        assert!(session.is_processing());
    }

    #[test]
    fn apply_requires_a_selection() {
        let mut session = CropSession::default();
        assert!(matches!(session.begin_apply(), Err(CropError::MissingSource)));

        session.load(upload()).unwrap();
        assert!(matches!(session.begin_apply(), Err(CropError::EmptyCrop)));
        assert_eq!(session.state_name(), "image-loaded");
    }

    #[test]
    fn cancel_returns_to_idle_from_any_state() {
        let mut session = CropSession::default();
        session.load(upload()).unwrap();
        session.cancel();
        assert_eq!(session, CropSession::Idle);

        session.load(upload()).unwrap();
        session.image_displayed(geometry(), &CropSettings::default());
        session.move_selection(10.0, 10.0);
        session.cancel();
        assert_eq!(session, CropSession::Idle);
        assert!(session.take_job().is_none());
    }

    #[test]
    fn selection_edits_only_apply_while_cropping() {
        let settings = CropSettings::default();
        let mut session = CropSession::default();
        session.resize_selection(50.0, &settings);
        assert_eq!(session, CropSession::Idle);

        session.load(upload()).unwrap();
        session.image_displayed(geometry(), &settings);
        session.resize_selection(100.0, &settings);
        let (_, selection) = session.selection().unwrap();
        assert_eq!(selection.size, 100.0);
    }
}
