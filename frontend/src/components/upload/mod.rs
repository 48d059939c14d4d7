//! Upload prompt: a drop zone that also opens the file picker on click.
//!
//! Only `.csv` is advertised to the picker; the content itself is not checked
//! here. The first file of a selection or drop is forwarded through
//! `on_file`.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};
use yew::{classes, html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub on_file: Callback<File>,
}

pub enum Msg {
    DragEnter,
    DragLeave,
    Picked(Option<File>),
}

pub struct FileUpload {
    dragging: bool,
}

impl Component for FileUpload {
    type Message = Msg;
    type Properties = FileUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FileUpload { dragging: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragEnter => {
                let changed = !self.dragging;
                self.dragging = true;
                changed
            }
            Msg::DragLeave => {
                let changed = self.dragging;
                self.dragging = false;
                changed
            }
            Msg::Picked(file) => {
                self.dragging = false;
                if let Some(file) = file {
                    ctx.props().on_file.emit(file);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let ondragenter = link.callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            Msg::DragEnter
        });
        let ondragleave = link.callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            Msg::DragLeave
        });
        // Needed so the browser allows dropping at all.
        let ondragover = Callback::from(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
        });
        let ondrop = link.callback(|e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            let file = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            Msg::Picked(file)
        });
        let onchange = link.callback(|e: Event| {
            let file = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| {
                    let file = input.files().and_then(|files| files.get(0));
                    // allow picking the same file again after a reset
                    input.set_value("");
                    file
                });
            Msg::Picked(file)
        });

        html! {
            <div class="upload">
                <h2>{"Unlock Insights from Your Support Data"}</h2>
                <p class="upload-lead">
                    {"Upload user logs, usage dumps, or any CSV data. Our AI agent will automatically \
                      surface anomalies, uncover root causes, and summarize patterns."}
                </p>
                <label
                    for="file-upload"
                    data-testid="file-upload-area"
                    class={classes!("drop-zone", self.dragging.then_some("dragging"))}
                    {ondragenter}
                    {ondragleave}
                    {ondragover}
                    {ondrop}
                >
                    <i class="material-icons drop-icon">{"cloud_upload"}</i>
                    <span class="drop-title">
                        { if self.dragging { "Drop the file here" } else { "Upload a CSV file or drag and drop" } }
                    </span>
                    <span class="drop-hint">{"Max file size 10MB"}</span>
                    <input
                        id="file-upload"
                        name="file-upload"
                        type="file"
                        accept=".csv"
                        class="sr-only"
                        {onchange}
                    />
                </label>
            </div>
        }
    }
}
