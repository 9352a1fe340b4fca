/// Fills a solution template by replacing every literal `{year}` and then
/// every literal `{day}` with the numeric values. Plain text replacement,
/// nothing else in the template is touched.
pub fn render(text: &str, day: u32, year: i32) -> String {
    text.replace("{year}", &year.to_string())
        .replace("{day}", &day.to_string())
}
