//! Upload widget controller.
//!
//! [`UploadWidget`] owns the current file and the last extraction result and
//! is the only place either changes. Components keep it in an `RwSignal` and
//! render from it.
//!
//! ```text
//!            select (valid)                 submit
//!  Idle ───────────────────▶ FileSelected ─────────▶ Submitting
//!                              ▲    ▲                 │      │
//!                select (valid)│    │ submit     ok   │      │ err
//!                              │    └──── ResultReady ◀      ▼
//!                              └──────────────────────── Error
//! ```
//!
//! A submission is a [`SubmitTicket`] taken by [`UploadWidget::begin_submit`]
//! and handed back to [`UploadWidget::finish_submit`] with the outcome, which
//! always leaves `Submitting`.

use crate::{
    export::{prepare_export, CsvExport},
    validation::validate_file,
    AppError, AppResult, DocumentFile, ExtractionResult, SelectedFile,
};

/// Lifecycle of the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetPhase {
    /// Nothing selected yet
    Idle,
    /// A valid file is ready to submit
    FileSelected,
    /// Waiting for the host
    Submitting,
    /// Last submission succeeded
    ResultReady,
    /// Last submission failed; the message was shown to the user
    Error(String),
}

/// Proof that a submission is in flight. Carries the file to send.
#[derive(Debug)]
pub struct SubmitTicket<F> {
    file: F,
}

impl<F> SubmitTicket<F> {
    /// The file being submitted.
    pub fn file(&self) -> &F {
        &self.file
    }
}

/// State of the upload widget.
#[derive(Clone, Debug)]
pub struct UploadWidget<F> {
    phase: WidgetPhase,
    file: Option<F>,
    selected: Option<SelectedFile>,
    result: Option<ExtractionResult>,
    results_visible: bool,
}

impl<F> Default for UploadWidget<F> {
    fn default() -> Self {
        Self {
            phase: WidgetPhase::Idle,
            file: None,
            selected: None,
            result: None,
            results_visible: false,
        }
    }
}

impl<F: DocumentFile + Clone> UploadWidget<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &WidgetPhase {
        &self.phase
    }

    /// Metadata of the current selection.
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Last successful extraction.
    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == WidgetPhase::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_submitting()
    }

    /// Result to show in the results panel. Hidden while submitting and
    /// after a failed submission.
    pub fn visible_result(&self) -> Option<&ExtractionResult> {
        if self.results_visible {
            self.result.as_ref()
        } else {
            None
        }
    }

    /// Make `file` the current selection if it passes validation.
    ///
    /// On error nothing changes.
    pub fn select_file(&mut self, file: F) -> AppResult<&SelectedFile> {
        if self.is_submitting() {
            return Err(AppError::Busy);
        }

        let info = SelectedFile::of(&file);
        validate_file(&info)?;

        self.file = Some(file);
        self.phase = WidgetPhase::FileSelected;
        Ok(self.selected.insert(info))
    }

    /// Enter `Submitting` and hand out the file to send.
    pub fn begin_submit(&mut self) -> AppResult<SubmitTicket<F>> {
        if self.is_submitting() {
            return Err(AppError::Busy);
        }
        let file = self.file.clone().ok_or(AppError::NoFileSelected)?;

        self.phase = WidgetPhase::Submitting;
        self.results_visible = false;
        Ok(SubmitTicket { file })
    }

    /// Leave `Submitting` with the outcome of the request.
    ///
    /// Failures are returned so the caller can report them; the widget is
    /// re-submittable either way.
    pub fn finish_submit(
        &mut self,
        _ticket: SubmitTicket<F>,
        outcome: AppResult<ExtractionResult>,
    ) -> AppResult<()> {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.results_visible = true;
                self.phase = WidgetPhase::ResultReady;
                Ok(())
            }
            Err(err) => {
                self.phase = WidgetPhase::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// CSV for the held result, `Ok(None)` if nothing was extracted yet.
    pub fn export(&self, now_ms: i64) -> AppResult<Option<CsvExport>> {
        prepare_export(self.result.as_ref(), now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{services::upload::interpret_response, MAX_FILE_SIZE};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile {
        name: &'static str,
        size: u64,
        mime: &'static str,
    }

    impl DocumentFile for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    fn pdf(name: &'static str) -> TestFile {
        TestFile { name, size: 524_288, mime: "application/pdf" }
    }

    fn extraction(raw_text: &str) -> ExtractionResult {
        ExtractionResult {
            raw_text: raw_text.to_string(),
            extracted_data: json!({"company_name": "Acme"}).as_object().cloned().unwrap(),
            file_name: None,
            processing_status: None,
        }
    }

    #[test]
    fn test_starts_idle() {
        let widget = UploadWidget::<TestFile>::new();
        assert_eq!(widget.phase(), &WidgetPhase::Idle);
        assert!(!widget.can_submit());
        assert!(widget.selected().is_none());
    }

    #[test]
    fn test_valid_selection_enables_submit() {
        let mut widget = UploadWidget::new();
        let selected = widget.select_file(pdf("invoice.pdf")).unwrap();
        assert_eq!(selected.name, "invoice.pdf");
        assert_eq!(selected.size_label(), "0.50 MB");

        assert_eq!(widget.phase(), &WidgetPhase::FileSelected);
        assert!(widget.can_submit());
    }

    #[test]
    fn test_invalid_type_keeps_previous_selection() {
        let mut widget = UploadWidget::new();
        widget.select_file(pdf("invoice.pdf")).unwrap();

        let gif = TestFile { name: "cat.gif", size: 10, mime: "image/gif" };
        assert!(matches!(widget.select_file(gif), Err(AppError::InvalidFile(_))));

        assert_eq!(widget.selected().unwrap().name, "invoice.pdf");
        assert_eq!(widget.phase(), &WidgetPhase::FileSelected);
    }

    #[test]
    fn test_oversized_file_keeps_previous_selection() {
        let mut widget = UploadWidget::<TestFile>::new();
        let big = TestFile { name: "big.png", size: MAX_FILE_SIZE + 1, mime: "image/png" };
        assert!(widget.select_file(big).is_err());

        assert!(widget.selected().is_none());
        assert_eq!(widget.phase(), &WidgetPhase::Idle);
        assert!(!widget.can_submit());
    }

    #[test]
    fn test_submit_without_file() {
        let mut widget = UploadWidget::<TestFile>::new();
        assert_eq!(widget.begin_submit().unwrap_err(), AppError::NoFileSelected);
        assert_eq!(widget.phase(), &WidgetPhase::Idle);
    }

    #[test]
    fn test_submitting_blocks_resubmit_and_selection() {
        let mut widget = UploadWidget::new();
        widget.select_file(pdf("a.pdf")).unwrap();
        let ticket = widget.begin_submit().unwrap();
        assert_eq!(ticket.file().name, "a.pdf");

        assert!(widget.is_submitting());
        assert!(!widget.can_submit());
        assert_eq!(widget.begin_submit().unwrap_err(), AppError::Busy);
        assert_eq!(widget.select_file(pdf("b.pdf")).unwrap_err(), AppError::Busy);
        assert_eq!(widget.selected().unwrap().name, "a.pdf");
    }

    #[test]
    fn test_success_shows_result() {
        let mut widget = UploadWidget::new();
        widget.select_file(pdf("a.pdf")).unwrap();
        let ticket = widget.begin_submit().unwrap();

        widget.finish_submit(ticket, Ok(extraction("ABC"))).unwrap();

        assert_eq!(widget.phase(), &WidgetPhase::ResultReady);
        assert_eq!(widget.visible_result().unwrap().raw_text, "ABC");
        assert!(widget.can_submit());
    }

    #[test]
    fn test_http_failure_reenables_submit() {
        let mut widget = UploadWidget::new();
        widget.select_file(pdf("a.pdf")).unwrap();
        let ticket = widget.begin_submit().unwrap();

        let outcome = interpret_response(500, r#"{"success": false, "detail": "upstream down"}"#);
        let err = widget.finish_submit(ticket, outcome).unwrap_err();

        assert!(matches!(err, AppError::RequestFailed { status: 500, .. }));
        assert!(matches!(widget.phase(), WidgetPhase::Error(_)));
        assert!(widget.can_submit());
        assert!(widget.visible_result().is_none());
    }

    #[test]
    fn test_failure_hides_previous_result() {
        let mut widget = UploadWidget::new();
        widget.select_file(pdf("a.pdf")).unwrap();
        let ticket = widget.begin_submit().unwrap();
        widget.finish_submit(ticket, Ok(extraction("first"))).unwrap();
        assert!(widget.export(1).unwrap().is_some());

        let ticket = widget.begin_submit().unwrap();
        assert!(widget.visible_result().is_none());
        let _ = widget.finish_submit(ticket, Err(AppError::Network("offline".into())));

        assert!(widget.visible_result().is_none());

        // The next success replaces it
        let ticket = widget.begin_submit().unwrap();
        widget.finish_submit(ticket, Ok(extraction("second"))).unwrap();
        assert_eq!(widget.visible_result().unwrap().raw_text, "second");
    }

    #[test]
    fn test_export_without_result_is_noop() {
        let mut widget = UploadWidget::new();
        assert_eq!(widget.export(1_700_000_000_000), Ok(None));

        widget.select_file(pdf("a.pdf")).unwrap();
        assert_eq!(widget.export(1_700_000_000_000), Ok(None));
    }
}
