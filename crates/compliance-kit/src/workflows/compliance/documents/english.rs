use super::DocumentContext;
use crate::workflows::compliance::domain::Locale;
use crate::workflows::compliance::labels::{or_placeholder, tool_list, Localized};

const LOCALE: Locale = Locale::En;
const DISCLAIMER: &str = "Note: Template only. This is not legal advice and does not replace an individual review.";

fn company_block(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    vec![
        format!("Company: {}", q.company),
        format!("Address: {}", q.address),
        format!("Industry: {}", q.industry.label(LOCALE)),
        format!("Employees: {}", q.employees.label()),
    ]
}

fn usage_block(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    vec![
        format!("AI tools in use: {}", tool_list(&q.tools)),
        format!("Use case: {}", or_placeholder(&q.use_case)),
        format!("Personal data: {}", q.personal_data.label(LOCALE)),
        format!("External use of outputs: {}", q.external_use.label(LOCALE)),
        format!(
            "Automated decisions with legal effect: {}",
            q.automated_decisions.label(LOCALE)
        ),
    ]
}

fn action_bullets(ctx: &DocumentContext<'_>) -> Vec<String> {
    ctx.assessment
        .action_texts(LOCALE)
        .map(|action| format!("- {action}"))
        .collect()
}

fn risk_line(ctx: &DocumentContext<'_>) -> String {
    format!("Risk level: {}", ctx.assessment.summary(LOCALE))
}

pub(super) fn use_policy(ctx: &DocumentContext<'_>) -> Vec<String> {
    let mut lines = vec![
        "for the use of artificial intelligence within the company".to_string(),
        String::new(),
    ];
    lines.extend(company_block(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "1. Purpose",
            "This policy governs the use of artificial intelligence (AI) systems within the company. It aims to ensure a responsible, secure and lawful use of AI applications.",
            "",
            "In particular, the policy serves to:",
            "- minimize risks",
            "- comply with regulatory requirements (including the EU AI Act)",
            "- protect personal data",
            "- safeguard trade and business secrets",
            "- avoid liability risks",
            "",
            "2. Scope",
            "This policy applies to all employees, managers, freelancers and any other persons using AI systems on behalf of the company.",
            "",
            "It covers:",
            "- publicly available AI tools (e.g. generative AI systems)",
            "- internal AI solutions",
            "- AI features embedded in third-party software",
            "",
            "3. Definitions",
            "Artificial intelligence (AI): software-based systems that generate content, support decisions or perform automated analyses.",
            "Generative AI: AI systems that create text, images, code or other content.",
            "",
            "4. Systems in use and purpose",
        ]
        .map(str::to_string),
    );
    lines.extend(usage_block(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "5. Permitted use",
            "Using AI systems is generally permitted provided that:",
            "1. no confidential information is entered without protection",
            "2. no personal data is processed without a legal basis",
            "3. outputs are reviewed before external use",
            "4. no discriminatory or unlawful content is created or distributed",
            "",
            "Final responsibility for generated content always remains with the responsible employee.",
            "",
            "6. Prohibited use",
            "In particular, the following is prohibited:",
            "- entering trade or business secrets into public AI systems",
            "- processing sensitive personal data without explicit approval",
            "- using AI for automated decisions with legal effect without a separate review",
            "- using AI to create unlawful content",
            "",
            "7. Data protection and information security",
            "The requirements of the GDPR and internal data protection guidelines apply to every use of AI systems.",
            "",
            "In particular, it must be ensured that:",
            "- no special categories of personal data are processed",
            "- data processing agreements have been reviewed",
            "- storage locations and data flows are documented transparently",
            "",
            "8. Transparency and documentation",
            "The use of AI systems must be documented internally. This includes in particular:",
            "- the name of the tool in use",
            "- the purpose of use",
            "- the type of data processed",
            "- the risk assessment",
            "",
            "9. Risk assessment and measures",
        ]
        .map(str::to_string),
    );
    lines.push(risk_line(ctx));
    lines.push("Mandatory measures:".to_string());
    lines.extend(action_bullets(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "10. Training and awareness",
            "Employees are regularly informed about the risks of generative AI, data protection requirements and safe use.",
            "",
            "11. Responsibilities",
            "Management bears overall responsibility for introducing and monitoring this policy. Managers ensure compliance within their area of responsibility.",
            "",
            "12. Disclaimer",
            "This policy is an internal organizational measure. It does not replace individual legal advice.",
            "",
            "13. Entry into force",
            "This policy enters into force upon publication.",
        ]
        .map(str::to_string),
    );
    lines
}

pub(super) fn transparency_notice(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    let mut lines = vec![
        format!(
            "{} uses artificial intelligence systems to support selected workflows.",
            q.company
        ),
        String::new(),
        "Which systems we use".to_string(),
        format!("AI tools: {}", tool_list(&q.tools)),
        format!("Purpose: {}", or_placeholder(&q.use_case)),
        String::new(),
        "How we handle your data".to_string(),
        format!(
            "Processing of personal data by AI: {}",
            q.personal_data.label(LOCALE)
        ),
        "Personal data is processed only to the extent necessary and on the basis of the GDPR."
            .to_string(),
        String::new(),
        "Human oversight".to_string(),
    ];
    if q.automated_decisions.is_yes() {
        lines.push(
            "AI-supported decisions with legal or similarly significant effect are reviewed by a responsible person before they take effect. You have the right to request human review (Art. 22 GDPR)."
                .to_string(),
        );
    } else {
        lines.push(
            "We do not make solely automated decisions with legal effect. AI outputs are reviewed by employees."
                .to_string(),
        );
    }
    if q.external_use.is_yes() {
        lines.push(
            "AI-generated content that we use externally is reviewed before publication and labelled where required."
                .to_string(),
        );
    }
    lines.extend([
        String::new(),
        "Contact".to_string(),
        format!("{}, {}", q.company, q.address),
        String::new(),
        DISCLAIMER.to_string(),
    ]);
    lines
}

pub(super) fn risk_assessment(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    let mut lines = company_block(ctx);
    lines.push(String::new());
    lines.push("AI usage profile".to_string());
    lines.extend(usage_block(ctx));
    lines.extend([
        String::new(),
        "Scoring scheme".to_string(),
        format!(
            "- Personal data ({}): limited +1, regular +2",
            q.personal_data.label(LOCALE)
        ),
        format!(
            "- External use of outputs ({}): +2",
            q.external_use.label(LOCALE)
        ),
        format!(
            "- Automated decisions ({}): +2",
            q.automated_decisions.label(LOCALE)
        ),
        "Bands: 0-1 Low, 2-3 Medium, 4 and above High".to_string(),
        String::new(),
        "Result".to_string(),
        risk_line(ctx),
        String::new(),
        "Recommended actions".to_string(),
    ]);
    lines.extend(action_bullets(ctx));
    lines.extend([
        String::new(),
        format!("Assessed on: {}", ctx.review_date.format("%Y-%m-%d")),
        "Repeat this self-assessment at least annually or whenever AI usage changes materially."
            .to_string(),
        String::new(),
        DISCLAIMER.to_string(),
    ]);
    lines
}

pub(super) fn compliance_summary(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    let mut lines = vec![
        format!("Company: {}", q.company),
        format!("As of: {}", ctx.review_date.format("%Y-%m-%d")),
        "Status: Documents generated".to_string(),
        String::new(),
        format!("AI tools: {}", tool_list(&q.tools)),
        format!("Use case: {}", or_placeholder(&q.use_case)),
        risk_line(ctx),
        String::new(),
        "Included documents".to_string(),
        "- AI Use Policy".to_string(),
        "- AI Transparency Notice".to_string(),
        "- AI Risk Self-Assessment".to_string(),
        "- Internal AI Register (Excel)".to_string(),
        String::new(),
        "Next steps".to_string(),
    ];
    lines.extend(action_bullets(ctx));
    lines.extend([String::new(), DISCLAIMER.to_string()]);
    lines
}
