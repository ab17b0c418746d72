//! Stylesheet of the editor chrome. The CV itself is styled by
//! `common::preview::STYLESHEET`.

pub const EDITOR_CSS: &str = r#"
body { margin: 0; background: #f3f4f6; font-family: Arial, sans-serif; color: #1f2937; }
.cv-editor-root { min-height: 100vh; }
.toolbar { display: flex; align-items: center; gap: 12px; padding: 10px 20px; background: #fff; border-bottom: 1px solid #e5e7eb; position: sticky; top: 0; z-index: 10; }
.toolbar h1 { font-size: 18px; margin: 0 auto 0 0; }
.toolbar select { padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 4px; }
.editor-layout { display: grid; grid-template-columns: minmax(340px, 480px) 1fr; gap: 20px; padding: 20px; }
.editor-pane { display: flex; flex-direction: column; gap: 12px; }
.preview-pane { overflow: auto; }
.tab-bar { display: flex; flex-wrap: wrap; gap: 4px; }
.tab-btn { display: inline-flex; align-items: center; gap: 4px; padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 4px; background: #fff; cursor: pointer; }
.tab-btn.active { background: #1976d2; border-color: #1976d2; color: #fff; }
.section-card { background: #fff; border: 1px solid #e5e7eb; border-radius: 6px; }
.section-card-header { display: flex; align-items: center; gap: 8px; width: 100%; padding: 10px 14px; background: none; border: none; font-size: 15px; font-weight: 600; cursor: pointer; }
.section-card-title { margin-right: auto; }
.section-card-body { padding: 0 14px 14px; }
.form-grid, .entries { display: flex; flex-direction: column; gap: 10px; }
.field { display: flex; flex-direction: column; gap: 4px; flex: 1; }
.field-label { font-size: 12px; color: #6b7280; }
.field input, .field textarea, .field select, .rated-row input, .rated-row select { padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 4px; font: inherit; }
.field-row { display: flex; gap: 10px; }
.date-input.unconventional { border-color: #f59e0b; background: #fffbeb; }
.checkbox { display: flex; align-items: center; gap: 6px; font-size: 14px; }
.entry-card { border: 1px solid #e5e7eb; border-radius: 6px; padding: 10px; display: flex; flex-direction: column; gap: 8px; }
.entry-header { display: flex; align-items: center; justify-content: space-between; }
.rated-row { display: grid; grid-template-columns: 1fr 170px auto; gap: 8px; align-items: center; }
.icon-btn { display: inline-flex; align-items: center; gap: 4px; padding: 4px 8px; border: 1px solid #d1d5db; border-radius: 4px; background: #fff; cursor: pointer; }
.icon-btn.wide { padding: 6px 12px; }
.icon-btn.danger { color: #d32f2f; }
.add-btn { display: inline-flex; align-items: center; justify-content: center; gap: 4px; padding: 8px; border: 1px dashed #9ca3af; border-radius: 4px; background: #fafafa; cursor: pointer; }
.link-btn { align-self: flex-start; background: none; border: none; color: #1976d2; cursor: pointer; padding: 0; }
.photo-controls { display: flex; align-items: center; gap: 12px; }
.photo-actions { display: flex; flex-direction: column; gap: 6px; }
.photo-thumb { width: 72px; height: 72px; border-radius: 50%; object-fit: cover; }
.photo-thumb.empty { display: flex; align-items: center; justify-content: center; background: #e5e7eb; color: #6b7280; }

@media print {
  body { background: #fff; }
  .no-print { display: none !important; }
  .editor-layout { display: block; padding: 0; }
  .page-frame { box-shadow: none !important; transform: none !important; margin: 0 !important; }
}
"#;

/// Inline style of the transient toast notification.
pub const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "24px"),
    ("left", "50%"),
    ("transform", "translateX(-50%)"),
    ("background", "#1f2937"),
    ("color", "#fff"),
    ("padding", "10px 18px"),
    ("border-radius", "6px"),
    ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.25)"),
    ("z-index", "10000"),
    ("font-family", "Arial, sans-serif"),
];
