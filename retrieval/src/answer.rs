pub const CONTEXT_SEPARATOR: &str = "\n---\n";
pub const ANSWER_PREFIX: &str = "Answer from top docs:\n";

pub fn compose_context<T, S>(texts: T) -> String
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut context = String::new();
    for (i, text) in texts.into_iter().enumerate() {
        if i > 0 {
            context.push_str(CONTEXT_SEPARATOR);
        }
        context.push_str(text.as_ref());
    }
    context
}

pub fn compose_answer<T, S>(texts: T) -> String
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{}{}", ANSWER_PREFIX, compose_context(texts))
}
