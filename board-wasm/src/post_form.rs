use crate::models::PostFormData;
use crate::state::{FormField, PostFormState};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Handed to the parent on submit. The parent performs the request and
/// reports the outcome through `done`.
pub struct SubmitRequest {
    pub data: PostFormData,
    pub done: Callback<Result<(), String>>,
}

#[derive(Properties, PartialEq)]
pub struct PostFormProps {
    pub on_submit: Callback<SubmitRequest>,
    #[prop_or_default]
    pub initial: Option<PostFormData>,
    #[prop_or_default]
    pub is_edit: bool,
}

pub enum Msg {
    Update(FormField, String),
    Submit,
    Submitted(Result<(), String>),
}

pub struct PostForm {
    state: PostFormState,
}

impl Component for PostForm {
    type Message = Msg;
    type Properties = PostFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            state: PostFormState::new(props.initial.clone(), props.is_edit),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(field, value) => {
                self.state.set_field(field, value);
                true
            }

            Msg::Submit => {
                if let Some(data) = self.state.begin_submit() {
                    ctx.props().on_submit.emit(SubmitRequest {
                        data,
                        done: ctx.link().callback(Msg::Submitted),
                    });
                }
                true
            }

            Msg::Submitted(result) => {
                if let Err(e) = &result {
                    log::error!("Post submission failed: {}", e);
                }
                self.state.finish_submit(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_edit = self.state.is_edit;
        let submitting = self.state.submitting;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let title_id = self.state.field_id(FormField::Title);
        let author_id = self.state.field_id(FormField::Author);
        let content_id = self.state.field_id(FormField::Content);

        let button_label = if submitting {
            "Submitting..."
        } else if is_edit {
            "Update"
        } else {
            "Post"
        };

        html! {
            <div class="post-form">
                <h3>{ if is_edit { "Edit Post" } else { "New Post" } }</h3>

                if let Some(error) = &self.state.error {
                    <div class="error">{ error }</div>
                }

                <form {onsubmit}>
                    <label for={title_id.clone()}>{ "Title" }</label>
                    <input
                        id={title_id}
                        type="text"
                        value={self.state.data.title.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Update(FormField::Title, input.value())
                        })}
                    />

                    <label for={author_id.clone()}>{ "Author" }</label>
                    <input
                        id={author_id}
                        type="text"
                        disabled={is_edit}
                        value={self.state.data.author.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Update(FormField::Author, input.value())
                        })}
                    />

                    <label for={content_id.clone()}>{ "Content" }</label>
                    <textarea
                        id={content_id}
                        rows="4"
                        value={self.state.data.content.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::Update(FormField::Content, input.value())
                        })}
                    />

                    <button type="submit" disabled={submitting}>
                        { button_label }
                    </button>
                </form>
            </div>
        }
    }
}
