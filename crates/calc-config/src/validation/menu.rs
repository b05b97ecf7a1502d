use crate::schema::CalcConfig;

use super::MAX_TITLE_LEN;

pub(crate) fn validate_menu(errors: &mut Vec<String>, config: &CalcConfig) {
    let title = &config.menu.title;
    if title.trim().is_empty() {
        errors.push("menu.title must not be empty".into());
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        errors.push(format!(
            "menu.title is {len} characters, longer than {MAX_TITLE_LEN}"
        ));
    }
    if title.contains('\n') {
        errors.push("menu.title must be a single line".into());
    }
}
