//! Card renderer: normalized metrics to labeled, formatted cards.

use crate::types::{DisplayCard, Emphasis, MetricKey, MetricValue, MetricsSnapshot};

/// Display order of the cards. Independent of the snapshot's own order.
pub const METRIC_ORDER: [MetricKey; 7] = [
    MetricKey::LivePct,
    MetricKey::MaxPct,
    MetricKey::MinPct,
    MetricKey::LivePnl,
    MetricKey::Spot,
    MetricKey::Margin,
    MetricKey::Time,
];

/// Shown for a missing or empty metric. Must not start with '-' or it would
/// read as a loss.
pub const PLACEHOLDER: &str = "nan";

/// One card per key of [`METRIC_ORDER`].
pub fn render_cards(metrics: &MetricsSnapshot) -> Vec<DisplayCard> {
    METRIC_ORDER
        .iter()
        .map(|&key| {
            let text = format_metric(key, metrics.get(key));
            DisplayCard {
                label: key.label().to_string(),
                emphasis: emphasis_for(&text),
                text,
            }
        })
        .collect()
}

/// Card text for a metric. Percentage-class keys get a trailing `%`.
pub fn format_metric(key: MetricKey, value: Option<&MetricValue>) -> String {
    let mut text = match value {
        Some(MetricValue::Number(v)) => format_number(*v),
        Some(MetricValue::Text(s)) => s.clone(),
        Some(MetricValue::Bool(true)) => "TRUE".to_string(),
        Some(MetricValue::Bool(false)) => "FALSE".to_string(),
        Some(MetricValue::Empty) | None => PLACEHOLDER.to_string(),
    };
    if key.is_percentage() {
        text.push('%');
    }
    text
}

/// Negative emphasis is decided on the text, not the number: "-0.00" counts.
pub fn emphasis_for(text: &str) -> Emphasis {
    if text.starts_with('-') {
        Emphasis::Negative
    } else {
        Emphasis::Normal
    }
}

/// Two decimals with thousands separators, e.g. `-12,345.60`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Markup for the metrics row.
pub fn render_cards_html(cards: &[DisplayCard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!(
            "<div class=\"card\"><div class=\"card-value\" style=\"color:{}\">{}</div><div class=\"card-label\">{}</div></div>\n",
            card.emphasis.color(),
            escape_html(&card.text),
            escape_html(&card.label),
        ));
    }
    out
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> MetricsSnapshot {
        vec![
            (MetricKey::Time, MetricValue::Text("15:29:59".to_string())),
            (MetricKey::Margin, MetricValue::Number(150000.0)),
            (MetricKey::Spot, MetricValue::Number(22450.0)),
            (MetricKey::LivePnl, MetricValue::Number(-1250.5)),
            (MetricKey::MinPct, MetricValue::Number(-0.3)),
            (MetricKey::MaxPct, MetricValue::Number(1.25)),
            (MetricKey::LivePct, MetricValue::Number(0.05)),
        ]
        .into_iter()
        .collect()
    }

    // =========================================================================
    // Number formatting
    // =========================================================================

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(12345.6), "12,345.60");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(100.0), "100.00");
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(-1250.5), "-1,250.50");
        assert_eq!(format_number(-123456.0), "-123,456.00");
    }

    #[test]
    fn test_format_number_tiny_negative_keeps_sign() {
        assert_eq!(format_number(-0.001), "-0.00");
        assert_eq!(format_number(-0.0), "-0.00");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    // =========================================================================
    // Metric text
    // =========================================================================

    #[test]
    fn test_format_metric_percentage_suffix() {
        let v = MetricValue::Number(0.05);
        assert_eq!(format_metric(MetricKey::LivePct, Some(&v)), "0.05%");
        assert_eq!(format_metric(MetricKey::LivePnl, Some(&v)), "0.05");
        assert_eq!(format_metric(MetricKey::MaxPct, None), "nan%");
    }

    #[test]
    fn test_format_metric_text_and_empty() {
        let t = MetricValue::Text("15:29:59".to_string());
        assert_eq!(format_metric(MetricKey::Time, Some(&t)), "15:29:59");
        assert_eq!(format_metric(MetricKey::Margin, Some(&MetricValue::Empty)), "nan");
        assert_eq!(format_metric(MetricKey::Spot, None), "nan");
        assert_eq!(format_metric(MetricKey::Time, Some(&MetricValue::Bool(false))), "FALSE");
    }

    #[test]
    fn test_emphasis_is_textual() {
        assert_eq!(emphasis_for("-0.00%"), Emphasis::Negative);
        assert_eq!(emphasis_for("-1,250.50"), Emphasis::Negative);
        assert_eq!(emphasis_for("0.00"), Emphasis::Normal);
        assert_eq!(emphasis_for(PLACEHOLDER), Emphasis::Normal);
        assert_eq!(emphasis_for("15:29:59"), Emphasis::Normal);
    }

    // =========================================================================
    // Cards
    // =========================================================================

    #[test]
    fn test_cards_follow_fixed_order() {
        let cards = render_cards(&full_snapshot());
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["LIVE%", "MAX%", "MIN%", "LIVE_PNL", "SPOT", "MARGIN", "TIME"]
        );
    }

    #[test]
    fn test_cards_text_and_emphasis() {
        let cards = render_cards(&full_snapshot());
        let texts: Vec<&str> = cards.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["0.05%", "1.25%", "-0.30%", "-1,250.50", "22,450.00", "150,000.00", "15:29:59"]
        );
        assert_eq!(cards[2].emphasis, Emphasis::Negative);
        assert_eq!(cards[3].emphasis, Emphasis::Negative);
        assert_eq!(cards[0].emphasis, Emphasis::Normal);
    }

    #[test]
    fn test_rounded_tiny_negative_is_flagged() {
        let snapshot: MetricsSnapshot =
            vec![(MetricKey::LivePnl, MetricValue::Number(-0.001))].into_iter().collect();
        let cards = render_cards(&snapshot);
        assert_eq!(cards[3].text, "-0.00");
        assert_eq!(cards[3].emphasis, Emphasis::Negative);
    }

    #[test]
    fn test_cards_for_empty_snapshot() {
        let cards = render_cards(&MetricsSnapshot::new());
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].text, "nan%");
        assert_eq!(cards[6].text, "nan");
    }

    #[test]
    fn test_empty_cells_are_not_flagged_negative() {
        let snapshot: MetricsSnapshot = vec![
            (MetricKey::LivePnl, MetricValue::Empty),
            (MetricKey::Spot, MetricValue::Empty),
            (MetricKey::Margin, MetricValue::Empty),
            (MetricKey::Time, MetricValue::Empty),
        ]
        .into_iter()
        .collect();

        let cards = render_cards(&snapshot);
        for card in &cards[3..] {
            assert_eq!(card.text, "nan");
            assert_eq!(card.emphasis, Emphasis::Normal);
        }
    }

    // =========================================================================
    // Markup
    // =========================================================================

    #[test]
    fn test_render_cards_html() {
        let cards = vec![
            DisplayCard {
                label: "LIVE_PNL".to_string(),
                text: "-1,250.50".to_string(),
                emphasis: Emphasis::Negative,
            },
            DisplayCard {
                label: "TIME".to_string(),
                text: "<b>".to_string(),
                emphasis: Emphasis::Normal,
            },
        ];

        let html = render_cards_html(&cards);
        assert!(html.contains("style=\"color:crimson\">-1,250.50</div>"));
        assert!(html.contains("style=\"color:#2c3e50\">&lt;b&gt;</div>"));
        assert_eq!(html.matches("class=\"card\"").count(), 2);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("P&L <\"x\"> 'y'"), "P&amp;L &lt;&quot;x&quot;&gt; &#39;y&#39;");
    }
}
