use crate::results::advice::Advice;
use crate::results::ResultsView;

pub fn to_markdown(view: &ResultsView) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", view.badge));
    output.push_str(&format!("Role: {}\n", view.heading));
    output.push_str(&format!(
        "Overall score: {}/100 (gauge {:.1}%)\n",
        view.overall_score, view.gauge_position_pct
    ));
    if let Some(background) = &view.background {
        output.push_str(&format!("Background: {background}\n"));
    }
    output.push('\n');

    output.push_str("## Sub-scores\n\n");
    for sub in &view.sub_scores {
        output.push_str(&format!("- {}: {}/100\n", sub.label, sub.score));
    }
    output.push('\n');

    if !view.red_flags.is_empty() {
        output.push_str("## Red Flags\n\n");
        for flag in &view.red_flags {
            output.push_str(&format!("- {flag}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Advice\n\n");
    match &view.advice {
        Advice::Checklist(items) => {
            for item in items {
                output.push_str(&format!("- [ ] {item}\n"));
            }
        }
        Advice::Bullets(items) => {
            for item in items {
                output.push_str(&format!("- {item}\n"));
            }
        }
    }
    output.push('\n');

    output.push_str("## Rewrite Samples\n\n");
    for (index, card) in view.rewrites.iter().enumerate() {
        output.push_str(&format!("### {}. {}\n\n", index + 1, card.title));
        output.push_str(&format!("Original: {}\n", card.original));
        if card.locked {
            output.push_str("Rewritten: [locked] unlock Premium to see this rewrite\n\n");
        } else {
            output.push_str(&format!("Rewritten: {}\n\n", card.rewritten));
        }
    }

    output.push_str("## CV Preview\n\n");
    if view.preview.watermark {
        output.push_str("_PREVIEW_\n\n");
    }
    output.push_str(&format!("{}\n\n", view.preview.summary));
    for project in &view.preview.projects {
        output.push_str(&format!("- {project}\n"));
    }
    output.push_str(&format!("\nSkills: {}\n\n", view.preview.skills));

    output.push_str("## Premium\n\n");
    output.push_str(&format!("{}\n", view.premium.title));
    output.push_str(&format!(
        "- {} ({})\n",
        view.premium.cta_label,
        if view.premium.cta_enabled {
            "available"
        } else {
            "disabled"
        }
    ));
    output.push_str(&format!(
        "- Download: {}\n",
        if view.premium.download_enabled {
            "enabled"
        } else {
            "locked"
        }
    ));

    output
}
