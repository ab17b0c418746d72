use common::model::CvUpdate;
use common::photo::FileDescriptor;
use common::preview::TemplateKind;

use super::state::Tab;

pub enum Msg {
    SetTab(Tab),
    ToggleOptionalFields,
    UpdateCv(CvUpdate),
    SetTemplate(TemplateKind),
    LoadSample,

    OpenFileDialog,
    FileSelected(web_sys::File),
    FileRead { file: FileDescriptor, bytes: Vec<u8> },
    FileReadFailed(String),
    RemovePhoto,

    CropImageLoaded,
    CropImageFailed,
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    ResizeSelection(f64),
    ApplyCrop,
    RunCrop,
    CancelCrop,

    Print,
    ExportHtml,
}
