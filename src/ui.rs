use crate::controls::{ControlSet, SelectControl};
use crate::models::SelectorName;

pub fn render_index(controls: &ControlSet) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &render_select(controls, SelectorName::Date))
        .replace("{{CHANNEL}}", &render_select(controls, SelectorName::Channel))
        .replace("{{PRODUCT}}", &render_select(controls, SelectorName::Product))
}

fn render_select(controls: &ControlSet, name: SelectorName) -> String {
    let empty = SelectControl::default();
    let control = controls.get(name).unwrap_or(&empty);
    let options: String = control
        .options
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let value = escape_html(value);
            let selected = if index == control.selected_index { " selected" } else { "" };
            format!("\n          <option value=\"{value}\"{selected}>{value}</option>")
        })
        .collect();
    format!(
        "<select id=\"{id}\" name=\"{id}\" onchange=\"this.form.submit()\">{options}\n        </select>",
        id = name.id()
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Crash Spikes</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 20px;
    }

    .selectors {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    select {
      font: inherit;
      font-size: 1rem;
      text-transform: none;
      letter-spacing: normal;
      color: var(--accent);
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Crash Spikes</h1>
    <form method="post" action="/update">
      <div class="selectors">
        <label>Date
        {{DATE}}
        </label>
        <label>Channel
        {{CHANNEL}}
        </label>
        <label>Product
        {{PRODUCT}}
        </label>
      </div>
      <noscript><button type="submit">Show</button></noscript>
    </form>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> ControlSet {
        let mut set = ControlSet::new();
        set.insert(
            SelectorName::Date,
            SelectControl::new(vec!["2024-03-15".into(), "2024-03-14".into()]).with_selected("2024-03-14"),
        );
        set.insert(SelectorName::Channel, SelectControl::new(vec!["nightly".into()]));
        set.insert(SelectorName::Product, SelectControl::new(vec!["<Fx>".into()]));
        set
    }

    #[test]
    fn renders_each_select_with_its_id() {
        let html = render_index(&controls());
        for id in ["date", "channel", "product"] {
            assert!(html.contains(&format!("<select id=\"{id}\" name=\"{id}\"")));
        }
        assert!(!html.contains("{{"));
    }

    #[test]
    fn marks_the_selected_option() {
        let html = render_index(&controls());
        assert!(html.contains("<option value=\"2024-03-14\" selected>2024-03-14</option>"));
        assert!(html.contains("<option value=\"2024-03-15\">2024-03-15</option>"));
    }

    #[test]
    fn escapes_option_values() {
        let html = render_index(&controls());
        assert!(html.contains("<option value=\"&lt;Fx&gt;\" selected>&lt;Fx&gt;</option>"));
    }
}
