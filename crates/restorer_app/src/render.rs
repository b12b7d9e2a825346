use restorer_core::{PopupViewModel, PopupVisual};

/// Renders the popup view model as plain text for the terminal.
pub fn render(view: &PopupViewModel) -> String {
    match view.visual {
        PopupVisual::Unset => "No status received.\n".to_owned(),
        PopupVisual::NoVideo => "No video detected.\n".to_owned(),
        PopupVisual::CheckingAnnotations => "Checking for annotations...\n".to_owned(),
        PopupVisual::NoAnnotations => {
            format!("{}No annotations for this video.\n", header(view))
        }
        PopupVisual::Video => render_table(view),
    }
}

fn header(view: &PopupViewModel) -> String {
    match &view.video_id {
        Some(video_id) => format!("Video: {video_id}\n"),
        None => String::new(),
    }
}

fn render_table(view: &PopupViewModel) -> String {
    let mut out = header(view);
    out.push_str(&view.annotation_count_label);
    out.push('\n');
    for row in &view.rows {
        let text = row.text.as_deref().unwrap_or("No text");
        out.push_str(&format!("{}  {:<16}  {}\n", row.start_label, row.style, text));
    }
    out
}
