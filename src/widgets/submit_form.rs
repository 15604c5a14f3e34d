use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::api::InstabrandClient;
use crate::dom::{Element, FileInput, Page, SelectedFile};
use crate::models::BrandingSuggestion;
use crate::utils;

/// Sent as the category when the select has no value yet.
const CATEGORY_FALLBACK: &str = "other";

/// The product submission assistant: reacts to image selection with a
/// preview, a filename-derived title, and best-effort branding text.
///
/// Every selection bumps a generation counter; async completions from a
/// superseded selection are dropped instead of overwriting newer input.
#[derive(Clone)]
pub struct SubmitFormWidget {
    client: Arc<InstabrandClient>,
    image_input: FileInput,
    preview: Element,
    title: Option<Element>,
    description: Option<Element>,
    category: Option<Element>,
    generation: Arc<AtomicU64>,
}

impl SubmitFormWidget {
    /// Attach to the page, if it renders the submission form.
    pub fn attach(page: &Page, client: Arc<InstabrandClient>) -> Option<Self> {
        let form = page.submit_form.as_ref()?;
        Some(Self {
            client,
            image_input: form.image_input.clone(),
            preview: form.preview.clone(),
            title: form.title.clone(),
            description: form.description.clone(),
            category: form.category.clone(),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// React to a change on the image input. No-op when nothing is
    /// selected.
    pub async fn on_image_selected(&self) {
        let file = match self.image_input.file() {
            Some(f) => f,
            None => return,
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Preview decoding runs on its own task and may finish before or
        // after the steps below.
        self.spawn_preview(file.clone(), generation);

        if let Some(title) = &self.title {
            if title.value().is_empty() {
                title.set_value(utils::suggest_title(&file.name));
            }
        }

        if self.title.is_some() && self.description.is_some() {
            if let Some(category) = &self.category {
                let selected = category.value();
                let selected = if selected.is_empty() {
                    CATEGORY_FALLBACK.to_string()
                } else {
                    selected
                };
                match self.client.suggest(&selected).await {
                    Ok(suggestion) if self.is_current(generation) => {
                        self.apply_suggestion(&suggestion)
                    }
                    Ok(_) => debug!("branding suggestion for a superseded selection dropped"),
                    Err(e) => debug!("branding suggestion failed: {}", e),
                }
            }
        }
    }

    fn spawn_preview(&self, file: SelectedFile, generation: u64) {
        let widget = self.clone();
        tokio::spawn(async move {
            let url = utils::data_url(&file.name, &file.bytes);
            if widget.is_current(generation) {
                widget.preview.set_src(url);
                widget.preview.show();
            }
        });
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Fill title and description from a suggestion, each one only while
    /// its field is still empty.
    pub fn apply_suggestion(&self, suggestion: &BrandingSuggestion) {
        if let (Some(field), Some(text)) = (&self.title, &suggestion.title) {
            if field.value().is_empty() && !text.is_empty() {
                field.set_value(text.clone());
            }
        }
        if let (Some(field), Some(text)) = (&self.description, &suggestion.description) {
            if field.value().is_empty() && !text.is_empty() {
                field.set_value(text.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testutil::one_shot_server;
    use crate::dom::SubmitForm;
    use std::time::Duration;

    struct Fields {
        input: FileInput,
        title: Element,
        description: Element,
        category: Element,
    }

    fn form_widget(endpoint: &str) -> (SubmitFormWidget, Fields) {
        let fields = Fields {
            input: FileInput::new(),
            title: Element::new(),
            description: Element::new(),
            category: Element::new(),
        };
        let preview = Element::new();
        preview.hide();
        let page = Page {
            submit_form: Some(SubmitForm {
                image_input: fields.input.clone(),
                preview,
                title: Some(fields.title.clone()),
                description: Some(fields.description.clone()),
                category: Some(fields.category.clone()),
            }),
            ..Page::default()
        };
        let client = Arc::new(InstabrandClient::new(endpoint));
        let widget = SubmitFormWidget::attach(&page, client).unwrap();
        (widget, fields)
    }

    /// Widget without description/category fields, so no branding request
    /// ever goes out.
    fn title_only_widget() -> (SubmitFormWidget, FileInput, Element, Element) {
        let input = FileInput::new();
        let preview = Element::new();
        preview.hide();
        let title = Element::new();
        let page = Page {
            submit_form: Some(SubmitForm {
                image_input: input.clone(),
                preview: preview.clone(),
                title: Some(title.clone()),
                description: None,
                category: None,
            }),
            ..Page::default()
        };
        let client = Arc::new(InstabrandClient::new("http://127.0.0.1:1"));
        let widget = SubmitFormWidget::attach(&page, client).unwrap();
        (widget, input, preview, title)
    }

    async fn wait_for_src(preview: &Element) -> String {
        for _ in 0..100 {
            let src = preview.src();
            if !src.is_empty() {
                return src;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("preview src never set");
    }

    #[tokio::test]
    async fn test_no_file_selected_is_a_noop() {
        let (widget, _input, preview, title) = title_only_widget();
        widget.on_image_selected().await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(preview.src().is_empty());
        assert!(!preview.is_visible());
        assert!(title.value().is_empty());
    }

    #[tokio::test]
    async fn test_preview_shows_data_url() {
        let (widget, input, preview, _title) = title_only_widget();
        input.select(SelectedFile::new("pot.png", vec![9, 9, 9]));
        widget.on_image_selected().await;

        let src = wait_for_src(&preview).await;
        assert!(src.starts_with("data:image/png;base64,"));
        assert!(preview.is_visible());
    }

    #[tokio::test]
    async fn test_empty_title_gets_filename_suggestion() {
        let (widget, input, _preview, title) = title_only_widget();
        input.select(SelectedFile::new("my_cool-photo.png", vec![1]));
        widget.on_image_selected().await;
        assert_eq!(title.value(), "My cool photo");
    }

    #[tokio::test]
    async fn test_nonempty_title_is_never_overwritten() {
        let (widget, input, _preview, title) = title_only_widget();
        title.set_value("Handwoven shawl".to_string());
        input.select(SelectedFile::new("my_cool-photo.png", vec![1]));
        widget.on_image_selected().await;
        assert_eq!(title.value(), "Handwoven shawl");
    }

    #[tokio::test]
    async fn test_branding_fills_only_empty_fields() {
        let body =
            r#"{"title": "Handmade Cotton Bag", "description": "Crafted by SHG artisans."}"#;
        let (base, rx) = one_shot_server("200 OK", body).await;
        let (widget, fields) = form_widget(&base);
        fields.category.set_value("textiles".to_string());
        fields.input.select(SelectedFile::new("my_cool-photo.png", vec![1]));

        widget.on_image_selected().await;

        // title was taken by the filename heuristic first, so the branding
        // title must not replace it
        assert_eq!(fields.title.value(), "My cool photo");
        assert_eq!(fields.description.value(), "Crafted by SHG artisans.");

        let request = rx.await.unwrap();
        assert!(request.contains("category=textiles"));
    }

    #[tokio::test]
    async fn test_unselected_category_falls_back_to_other() {
        let (base, rx) = one_shot_server("200 OK", "{}").await;
        let (widget, fields) = form_widget(&base);
        fields.input.select(SelectedFile::new("pot.png", vec![1]));

        widget.on_image_selected().await;

        let request = rx.await.unwrap();
        assert!(request.contains("category=other"));
    }

    #[tokio::test]
    async fn test_branding_failure_leaves_fields_alone() {
        let (widget, fields) = form_widget("http://127.0.0.1:1");
        fields.input.select(SelectedFile::new("basket.jpg", vec![1]));

        widget.on_image_selected().await;

        assert_eq!(fields.title.value(), "Basket");
        assert!(fields.description.value().is_empty());
    }

    #[tokio::test]
    async fn test_apply_suggestion_respects_filled_description() {
        let (widget, fields) = form_widget("http://127.0.0.1:1");
        fields.description.set_value("Already written".to_string());
        widget.apply_suggestion(&BrandingSuggestion {
            title: Some("Suggested".to_string()),
            description: Some("Replacement".to_string()),
            hashtags: None,
            poster_url: None,
        });
        assert_eq!(fields.title.value(), "Suggested");
        assert_eq!(fields.description.value(), "Already written");
    }

    #[tokio::test]
    async fn test_newer_selection_wins_over_stale_preview() {
        let (widget, input, preview, _title) = title_only_widget();
        input.select(SelectedFile::new("first.png", vec![1]));
        widget.on_image_selected().await;
        input.select(SelectedFile::new("second.gif", vec![2]));
        widget.on_image_selected().await;

        // give both spawned preview tasks time to settle
        tokio::time::sleep(Duration::from_millis(30)).await;
        let src = wait_for_src(&preview).await;
        assert!(src.starts_with("data:image/gif;base64,"));
    }
}
