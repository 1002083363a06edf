use content::{ContentSource, StaticContent};

use super::*;

fn profile() -> &'static Profile {
    StaticContent::builtin().profile()
}

#[test]
fn post_title_uses_blog_suffix() {
    let post = StaticContent::builtin().post("future-of-web-development").unwrap();
    assert_eq!(post_title(post, profile()), "The Future of Web Development - Priyav's Blog");
}

#[test]
fn project_title_uses_owner_suffix() {
    let project = StaticContent::builtin().project("task-management-app").unwrap();
    assert_eq!(project_title(project, profile()), "Task Management App - Priyav");
}

#[test]
fn missing_records_get_not_found_titles() {
    assert_eq!(not_found_title(Some(ContentKind::Post)), "Post Not Found");
    assert_eq!(not_found_title(Some(ContentKind::Project)), "Project Not Found");
    assert_eq!(not_found_title(None), "Page Not Found");
}

#[test]
fn page_and_home_titles() {
    assert_eq!(page_title("Contact", profile()), "Contact - Priyav");
    assert_eq!(home_title(profile()), "Priyav - Full Stack Developer & Creative Problem Solver");
}
