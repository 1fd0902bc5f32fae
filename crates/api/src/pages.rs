use sales_dashboard_core::domain::sales::SalesRecord;

const CHART_TEMPLATE: &str = include_str!("../templates/sales_dashboard.html");
const DAYS_TEMPLATE: &str = include_str!("../templates/sales_dashboard0.html");

/// Context for the chart page: the serialized Vega-Lite spec.
#[derive(Debug, Clone)]
pub struct ChartPage {
    pub chart: String,
}

impl ChartPage {
    pub fn render(&self) -> String {
        CHART_TEMPLATE.replace("{{ chart }}", &escape_script_json(&self.chart))
    }
}

/// Context for the listing page: the fetched rows, untouched.
#[derive(Debug, Clone)]
pub struct DaysPage {
    pub days: Vec<SalesRecord>,
}

impl DaysPage {
    pub fn render(&self) -> String {
        let rows = self
            .days
            .iter()
            .map(|record| {
                format!(
                    "      <tr><td>{}</td><td>{}</td></tr>",
                    escape_html(&record.day.to_string()),
                    record.sales
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        DAYS_TEMPLATE
            .replace("{{ count }}", &self.days.len().to_string())
            .replace("{{ rows }}", &rows)
    }
}

// '<' only occurs inside JSON strings, where its unicode escape decodes to the same text.
// This keeps "</script>" out of the script element.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sales_dashboard_core::chart::{ChartSpec, ChartTable};

    fn two_days() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new(NaiveDate::from_ymd_opt(2020, 10, 1).unwrap(), 5),
            SalesRecord::new(NaiveDate::from_ymd_opt(2020, 10, 2).unwrap(), 12),
        ]
    }

    #[test]
    fn chart_page_embeds_spec_for_vega_embed() {
        let table = ChartTable::from_records(&two_days());
        let chart = ChartSpec::bar_chart(&table).to_json().unwrap();
        let html = ChartPage {
            chart: chart.clone(),
        }
        .render();

        assert!(!html.contains("{{ chart }}"));
        assert!(html.contains("vegaEmbed(\"#chart\""));
        assert!(html.contains(&chart));
    }

    #[test]
    fn chart_page_cannot_close_its_script_element() {
        let chart = r#"{"title":"</script><script>alert(1)</script>"}"#;
        let html = ChartPage {
            chart: chart.to_string(),
        }
        .render();

        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#"{"title":"\u003c/script>\u003cscript>alert(1)\u003c/script>"}"#));

        let escaped = escape_script_json(chart);
        let v: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(v["title"], "</script><script>alert(1)</script>");
    }

    #[test]
    fn days_page_lists_every_record() {
        let html = DaysPage { days: two_days() }.render();

        assert!(html.contains("<p>2 days</p>"));
        assert!(html.contains("<tr><td>2020-10-01</td><td>5</td></tr>"));
        assert!(html.contains("<tr><td>2020-10-02</td><td>12</td></tr>"));
        assert!(!html.contains("{{ rows }}"));
    }

    #[test]
    fn days_page_rows_keep_record_order_one_per_line() {
        let mut days = two_days();
        days.reverse();
        let html = DaysPage { days }.render();

        let later = html.find("<td>2020-10-02</td>").unwrap();
        let earlier = html.find("<td>2020-10-01</td>").unwrap();
        assert!(later < earlier);
        assert!(html.contains("<td>12</td></tr>\n      <tr><td>2020-10-01</td>"));
        assert!(html.contains("<td>5</td></tr>\n    </tbody>"));
    }

    #[test]
    fn days_page_renders_with_no_rows() {
        let html = DaysPage { days: Vec::new() }.render();
        assert!(html.contains("<p>0 days</p>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn escapes_html_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
