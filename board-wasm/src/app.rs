use crate::api::ApiClient;
use crate::models::*;
use crate::post_form::{PostForm, SubmitRequest};
use crate::state::BoardState;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    // Loading
    LoadPosts,
    PostsLoaded(Vec<Post>),
    LoadFailed(String),

    // Create / edit, submitted by PostForm
    CreatePost(SubmitRequest),
    UpdatePost(SubmitRequest),
    EditPost(String),
    CloseEdit,

    // Delete confirmation
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished,
    DeleteFailed(String),
}

pub struct App {
    state: BoardState,
    api: ApiClient,
}

// Mutations always finish with a full re-fetch rather than patching local state.
async fn reload(api: &ApiClient, link: &Scope<App>) {
    match api.list_posts().await {
        Ok(posts) => link.send_message(Msg::PostsLoaded(posts)),
        Err(e) => link.send_message(Msg::LoadFailed(e)),
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::LoadPosts);

        Self {
            state: BoardState::default(),
            api: ApiClient::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoadPosts => {
                self.state.begin_loading();

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    reload(&api, &link).await;
                });

                true
            }

            Msg::PostsLoaded(posts) => {
                self.state.posts_loaded(posts);
                true
            }

            Msg::LoadFailed(e) => {
                log::error!("Error fetching posts: {}", e);
                self.state.load_failed();
                true
            }

            Msg::CreatePost(SubmitRequest { data, done }) => {
                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.create_post(&data).await {
                        Ok(_) => {
                            reload(&api, &link).await;
                            done.emit(Ok(()));
                        }
                        Err(e) => {
                            log::error!("Error creating post: {}", e);
                            done.emit(Err(e));
                        }
                    }
                });

                false
            }

            Msg::UpdatePost(SubmitRequest { data, done }) => {
                let Some(id) = self.state.editing_id().map(str::to_string) else {
                    return false;
                };

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.update_post(&id, &data).await {
                        Ok(_) => {
                            reload(&api, &link).await;
                            done.emit(Ok(()));
                            link.send_message(Msg::CloseEdit);
                        }
                        Err(e) => {
                            log::error!("Error updating post: {}", e);
                            done.emit(Err(e));
                        }
                    }
                });

                false
            }

            Msg::EditPost(id) => self.state.start_edit(&id),

            Msg::CloseEdit => {
                self.state.close_edit();
                true
            }

            Msg::RequestDelete(id) => {
                self.state.request_delete(id);
                true
            }

            Msg::CancelDelete => {
                self.state.cancel_delete();
                true
            }

            Msg::ConfirmDelete => {
                let Some(id) = self.state.delete_confirm.clone() else {
                    return false;
                };

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.delete_post(&id).await {
                        Ok(()) => {
                            reload(&api, &link).await;
                            link.send_message(Msg::DeleteFinished);
                        }
                        Err(e) => link.send_message(Msg::DeleteFailed(e)),
                    }
                });

                false
            }

            Msg::DeleteFinished => {
                self.state.delete_finished();
                true
            }

            Msg::DeleteFailed(e) => {
                log::error!("Error deleting post: {}", e);
                self.state.delete_failed();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1>{ "Bulletin Board" }</h1>

                <PostForm on_submit={ctx.link().callback(Msg::CreatePost)} />

                if let Some(error) = &self.state.error {
                    <div class="error">{ error }</div>
                }

                { self.view_posts(ctx) }
                { self.view_edit_modal(ctx) }
                { self.view_delete_modal(ctx) }
            </div>
        }
    }
}

impl App {
    fn view_posts(&self, ctx: &Context<Self>) -> Html {
        if self.state.loading {
            return html! { <div class="loading"><div class="spinner"></div></div> };
        }

        if self.state.is_empty() {
            return html! { <div class="empty">{ "No posts yet" }</div> };
        }

        html! {
            <div class="posts-list">
                { for self.state.posts.iter().map(|post| self.view_post(post, ctx)) }
            </div>
        }
    }

    fn view_post(&self, post: &Post, ctx: &Context<Self>) -> Html {
        let edit_id = post.id.clone();
        let delete_id = post.id.clone();

        html! {
            <div class="post" key={post.id.clone()}>
                <div class="post-body">
                    <h2>{ &post.title }</h2>
                    <p class="post-meta">
                        { format!("By {} | {}", post.author, post.created_label()) }
                    </p>
                    <p class="post-content">{ &post.content }</p>
                </div>
                <div class="post-actions">
                    <button
                        class="edit"
                        aria-label="edit"
                        onclick={ctx.link().callback(move |_| Msg::EditPost(edit_id.clone()))}
                    >
                        { "Edit" }
                    </button>
                    <button
                        class="delete"
                        aria-label="delete"
                        onclick={ctx.link().callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                    >
                        { "Delete" }
                    </button>
                </div>
            </div>
        }
    }

    fn view_edit_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(post) = &self.state.editing else {
            return html! {};
        };

        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{ "Edit Post" }</h2>
                        <button class="close" onclick={ctx.link().callback(|_| Msg::CloseEdit)}>
                            { "✕" }
                        </button>
                    </div>
                    <PostForm
                        key={post.id.clone()}
                        on_submit={ctx.link().callback(Msg::UpdatePost)}
                        initial={Some(PostFormData::from(post))}
                        is_edit={true}
                    />
                </div>
            </div>
        }
    }

    fn view_delete_modal(&self, ctx: &Context<Self>) -> Html {
        if self.state.delete_confirm.is_none() {
            return html! {};
        }

        html! {
            <div class="modal-backdrop">
                <div class="modal modal-small">
                    <h2>{ "Delete this post?" }</h2>
                    <p>{ "This cannot be undone. Are you sure you want to delete it?" }</p>
                    <div class="modal-actions">
                        <button class="cancel" onclick={ctx.link().callback(|_| Msg::CancelDelete)}>
                            { "Cancel" }
                        </button>
                        <button class="delete" onclick={ctx.link().callback(|_| Msg::ConfirmDelete)}>
                            { "Delete" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
