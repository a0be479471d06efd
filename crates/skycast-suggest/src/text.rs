/// Remove the markdown markers the provider likes to emit (`**`, `###`,
/// `##`, `#`) so the text reads cleanly as plain prose.
pub fn strip_markdown(text: &str) -> String {
    text.replace("**", "")
        .replace("###", "")
        .replace("##", "")
        .replace('#', "")
}
