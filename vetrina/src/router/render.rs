use askama::Template;

#[derive(Template)]
#[template(path = "_404.html")]
pub struct NotFoundTemplate;
