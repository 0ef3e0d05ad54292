use super::find_script;
use crate::domain::models::DeployError;
use crate::domain::models::ScriptId;

const LISTING: &str = r#"
<html>
  <body>
    <ul id="scriptlist">
      <li id="script-41" data-scriptname="InitiativeTracker">InitiativeTracker</li>
      <li id="script-42" data-scriptname="MyScript">MyScript</li>
    </ul>
  </body>
</html>
"#;

#[test]
fn it_finds_an_existing_script() {
    let res = find_script(LISTING, "MyScript").unwrap();
    assert_eq!(res, ScriptId::Existing("42".to_string()));
}

#[test]
fn it_returns_the_sentinel_when_no_script_matches() {
    let res = find_script(LISTING, "MissingScript").unwrap();
    assert_eq!(res, ScriptId::New);
}

#[test]
fn it_returns_the_sentinel_for_an_empty_page() {
    let res = find_script("<html><body></body></html>", "MyScript").unwrap();
    assert_eq!(res, ScriptId::New);
}

#[test]
fn it_requires_an_exact_name_match() {
    let res = find_script(LISTING, "myscript").unwrap();
    assert_eq!(res, ScriptId::New);
}

#[test]
fn it_rejects_an_entry_with_a_malformed_id() {
    let html = r#"<div id="42" data-scriptname="MyScript"></div>"#;
    let res = find_script(html, "MyScript");
    assert!(matches!(res, Err(DeployError::Parse(_))));
}

#[test]
fn it_renders_the_sentinel_as_a_path_segment() {
    assert_eq!(ScriptId::New.to_string(), "new");
    assert_eq!(ScriptId::Existing("42".to_string()).to_string(), "42");
}
