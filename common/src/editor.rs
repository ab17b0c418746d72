//! State owned by the top-level editor view.
//!
//! `EditorState` holds the single `CvData`, the selected template and the
//! crop dialog session. Every mutation the UI can make goes through here.

use crate::config::{CropSettings, UploadPolicy};
use crate::error::{CropError, EditorError};
use crate::model::{CvData, CvUpdate, PersonalField};
use crate::photo::{
    CropGeometry, CropPlan, CropSession, FileDescriptor, PendingUpload, crop_photo, plan_crop,
    validate_upload,
};
use crate::preview::{Document, TemplateKind, project};

#[derive(Debug, Default)]
pub struct EditorState {
    cv: CvData,
    template: TemplateKind,
    crop: CropSession,
    upload_policy: UploadPolicy,
    crop_settings: CropSettings,
}

impl EditorState {
    pub fn new(template: TemplateKind) -> Self {
        Self::with_config(template, UploadPolicy::default(), CropSettings::default())
    }

    pub fn with_config(
        template: TemplateKind,
        upload_policy: UploadPolicy,
        crop_settings: CropSettings,
    ) -> Self {
        Self {
            cv: CvData::default(),
            template,
            crop: CropSession::Idle,
            upload_policy,
            crop_settings,
        }
    }

    pub fn cv(&self) -> &CvData {
        &self.cv
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn crop(&self) -> &CropSession {
        &self.crop
    }

    pub fn upload_policy(&self) -> &UploadPolicy {
        &self.upload_policy
    }

    pub fn crop_settings(&self) -> &CropSettings {
        &self.crop_settings
    }

    pub fn update_cv(&mut self, update: CvUpdate) {
        self.cv.apply(update);
    }

    pub fn set_template(&mut self, template: TemplateKind) {
        if self.template != template {
            log::debug!("template: {} -> {}", self.template, template);
            self.template = template;
        }
    }

    /// Replaces the whole CV with the demonstration data.
    pub fn load_sample(&mut self) {
        self.cv = CvData::sample();
        log::info!("sample CV loaded");
    }

    /// Validation only; lets the caller refuse a file before reading it.
    pub fn check_upload(&self, file: &FileDescriptor) -> Result<(), EditorError> {
        validate_upload(file, &self.upload_policy)?;
        Ok(())
    }

    /// Validates the file and opens the crop dialog on its bytes.
    pub fn begin_upload(
        &mut self,
        file: &FileDescriptor,
        bytes: Vec<u8>,
    ) -> Result<(), EditorError> {
        self.check_upload(file)?;
        self.crop.load(PendingUpload::new(file.mime_type.clone(), bytes))?;
        Ok(())
    }

    pub fn image_displayed(&mut self, geometry: CropGeometry) {
        self.crop.image_displayed(geometry, &self.crop_settings);
    }

    pub fn move_selection(&mut self, dx: f64, dy: f64) {
        self.crop.move_selection(dx, dy);
    }

    pub fn resize_selection(&mut self, size: f64) {
        self.crop.resize_selection(size, &self.crop_settings);
    }

    /// Marks the crop as processing. The caller renders the busy state and
    /// then calls `complete_apply`.
    pub fn begin_apply(&mut self) -> Result<(), CropError> {
        self.crop.begin_apply()
    }

    /// Runs the transformer on the pending job. The session is idle
    /// afterwards whatever the outcome; the photo only changes on success.
    pub fn complete_apply(&mut self) -> Result<(), CropError> {
        self.complete_apply_with(|_| None)
    }

    /// Like `complete_apply`, but when the bytes are in a format the
    /// transformer cannot decode, `fallback` is given the crop plan and may
    /// rasterize it itself. Returning `None` keeps the decode failure.
    pub fn complete_apply_with<F>(&mut self, fallback: F) -> Result<(), CropError>
    where
        F: FnOnce(&CropPlan) -> Option<Result<String, CropError>>,
    {
        let job = self.crop.take_job().ok_or(CropError::MissingSource)?;
        let rect = job.selection.rect();
        let photo = match crop_photo(&job.upload.bytes, &job.geometry, &rect, &self.crop_settings) {
            Err(CropError::Unsupported(err)) => {
                let plan = plan_crop(&job.geometry, &rect, self.crop_settings.max_dimension)?;
                log::debug!("{} not decodable here, trying fallback", job.upload.mime_type);
                fallback(&plan).unwrap_or(Err(CropError::Unsupported(err)))?
            }
            result => result?,
        };
        log::info!("photo updated ({} bytes as data URI)", photo.len());
        self.cv.apply(CvUpdate::Personal(PersonalField::Photo(Some(photo))));
        Ok(())
    }

    /// The dialog image could not be loaded; nothing can be selected on it.
    pub fn image_failed(&mut self) {
        log::warn!("crop image failed to load ({})", self.crop.state_name());
        self.crop.cancel();
    }

    pub fn cancel_crop(&mut self) {
        self.crop.cancel();
    }

    pub fn remove_photo(&mut self) {
        self.cv.apply(CvUpdate::Personal(PersonalField::Photo(None)));
    }

    pub fn document(&self) -> Document {
        project(&self.cv, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, Skill, list};
    use crate::photo::Size;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn png_file(bytes: &[u8]) -> FileDescriptor {
        FileDescriptor {
            mime_type: "image/png".into(),
            size: bytes.len() as u64,
        }
    }

    fn geometry(width: f64, height: f64) -> CropGeometry {
        CropGeometry {
            natural: Size::new(width, height),
            displayed: Size::new(width / 2.0, height / 2.0),
        }
    }

    fn apply_crop(editor: &mut EditorState, width: u32, height: u32) -> Result<(), CropError> {
        let bytes = png_bytes(width, height);
        editor.begin_upload(&png_file(&bytes), bytes).unwrap();
        editor.image_displayed(geometry(width as f64, height as f64));
        editor.begin_apply()?;
        editor.complete_apply()
    }

    #[test]
    fn apply_commits_photo_and_closes_dialog() {
        let mut editor = EditorState::new(TemplateKind::Modern);
        apply_crop(&mut editor, 120, 80).unwrap();

        let photo = editor.cv().personal_info.photo.clone().unwrap();
        assert!(photo.starts_with("data:image/jpeg;base64,"));
        assert!(!editor.crop().is_open());
    }

    #[test]
    fn cancelling_a_second_upload_keeps_the_first_photo() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        apply_crop(&mut editor, 120, 80).unwrap();
        let first = editor.cv().personal_info.photo.clone();

        let bytes = png_bytes(60, 60);
        editor.begin_upload(&png_file(&bytes), bytes).unwrap();
        editor.image_displayed(geometry(60.0, 60.0));
        editor.move_selection(5.0, 5.0);
        editor.cancel_crop();

        assert_eq!(editor.crop().state_name(), "idle");
        assert_eq!(editor.cv().personal_info.photo, first);
    }

    #[test]
    fn failed_apply_leaves_photo_untouched() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        editor.update_cv(CvUpdate::Personal(PersonalField::Photo(Some("data:old".into()))));

        let file = FileDescriptor {
            mime_type: "image/jpeg".into(),
            size: 4,
        };
        editor.begin_upload(&file, vec![1, 2, 3, 4]).unwrap();
        editor.image_displayed(geometry(100.0, 100.0));
        editor.begin_apply().unwrap();
        assert!(matches!(editor.complete_apply(), Err(CropError::Unsupported(_))));

        assert_eq!(editor.cv().personal_info.photo.as_deref(), Some("data:old"));
        assert!(!editor.crop().is_open());
    }

    fn undecodable_upload(editor: &mut EditorState, mime_type: &str) {
        let file = FileDescriptor {
            mime_type: mime_type.into(),
            size: 4,
        };
        editor.begin_upload(&file, vec![0, 0, 0, 24]).unwrap();
        editor.image_displayed(geometry(800.0, 600.0));
        editor.begin_apply().unwrap();
    }

    #[test]
    fn undecodable_format_is_rasterized_by_the_fallback() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        undecodable_upload(&mut editor, "image/heic");

        let mut planned = None;
        editor
            .complete_apply_with(|plan| {
                planned = Some(*plan);
                Some(Ok("data:image/jpeg;base64,AAAA".into()))
            })
            .unwrap();

        let plan = planned.unwrap();
        assert!(plan.output_width.max(plan.output_height) <= 400);
        assert!(plan.source.x + plan.source.width <= 800.0);
        assert_eq!(
            editor.cv().personal_info.photo.as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
        assert!(!editor.crop().is_open());
    }

    #[test]
    fn fallback_failure_is_reported_and_photo_kept() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        undecodable_upload(&mut editor, "image/heif");

        let err = editor
            .complete_apply_with(|_| Some(Err(CropError::Canvas("tainted".into()))))
            .unwrap_err();
        assert!(matches!(err, CropError::Canvas(_)));
        assert_eq!(editor.cv().personal_info.photo, None);
    }

    #[test]
    fn decodable_image_never_reaches_the_fallback() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        let bytes = png_bytes(80, 80);
        editor.begin_upload(&png_file(&bytes), bytes).unwrap();
        editor.image_displayed(geometry(80.0, 80.0));
        editor.begin_apply().unwrap();

        editor
            .complete_apply_with(|_| panic!("fallback used for a PNG"))
            .unwrap();
        assert!(editor.cv().personal_info.photo.is_some());
    }

    #[test]
    fn image_load_failure_closes_the_dialog() {
        let mut editor = EditorState::new(TemplateKind::Creative);
        editor.update_cv(CvUpdate::Personal(PersonalField::Photo(Some("data:old".into()))));
        let bytes = png_bytes(40, 40);
        editor.begin_upload(&png_file(&bytes), bytes).unwrap();
        assert!(editor.crop().is_open());

        editor.image_failed();
        assert_eq!(editor.crop().state_name(), "idle");
        assert_eq!(editor.cv().personal_info.photo.as_deref(), Some("data:old"));
    }

    #[test]
    fn second_apply_while_processing_is_refused() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        let bytes = png_bytes(50, 50);
        editor.begin_upload(&png_file(&bytes), bytes).unwrap();
        editor.image_displayed(geometry(50.0, 50.0));
        editor.begin_apply().unwrap();
        assert!(matches!(editor.begin_apply(), Err(CropError::Busy)));
        editor.complete_apply().unwrap();
    }

    #[test]
    fn rejected_upload_leaves_state_alone() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        let file = FileDescriptor {
            mime_type: "image/gif".into(),
            size: 10,
        };
        let err = editor.begin_upload(&file, vec![0; 10]).unwrap_err();
        assert!(matches!(err, EditorError::Rejected(_)));
        assert_eq!(
            err.to_string(),
            "Format d'image non supporté. Utilisez JPG, PNG, WebP, HEIC ou HEIF"
        );
        assert!(!editor.crop().is_open());
    }

    #[test]
    fn appending_a_skill_adds_one_entry_with_fresh_id() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        editor.load_sample();
        let before = editor.cv().skills.clone();

        let added = Skill::named("Yew", Level::new(4));
        editor.update_cv(CvUpdate::Skills(list::appended(&before, added.clone())));

        let after = &editor.cv().skills;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&added));
        assert!(before.iter().all(|s| s.id != added.id));
    }

    #[test]
    fn remove_photo_and_template_switch_show_in_document() {
        let mut editor = EditorState::new(TemplateKind::Professional);
        editor.load_sample();
        editor.update_cv(CvUpdate::Personal(PersonalField::Photo(Some("data:x".into()))));
        editor.remove_photo();
        assert_eq!(editor.cv().personal_info.photo, None);

        editor.set_template(TemplateKind::Turquoise);
        let document = editor.document();
        assert_eq!(document.template, TemplateKind::Turquoise);
        assert!(document.text_content().contains("CD"));
    }
}
