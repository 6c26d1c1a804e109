use super::DocumentContext;
use crate::workflows::compliance::domain::Locale;
use crate::workflows::compliance::labels::{or_placeholder, tool_list, Localized};

const LOCALE: Locale = Locale::De;
const DISCLAIMER: &str =
    "Hinweis: Diese Vorlage stellt keine Rechtsberatung dar und ersetzt keine individuelle Prüfung.";

fn company_block(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    vec![
        format!("Unternehmen: {}", q.company),
        format!("Adresse: {}", q.address),
        format!("Branche: {}", q.industry.label(LOCALE)),
        format!("Mitarbeitende: {}", q.employees.label()),
    ]
}

fn usage_block(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    vec![
        format!("Eingesetzte KI-Tools: {}", tool_list(&q.tools)),
        format!("Einsatzzweck: {}", or_placeholder(&q.use_case)),
        format!("Personenbezogene Daten: {}", q.personal_data.label(LOCALE)),
        format!("Externe Nutzung der Ergebnisse: {}", q.external_use.label(LOCALE)),
        format!(
            "Automatisierte Entscheidungen mit rechtlicher Wirkung: {}",
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
    format!("Risikostufe: {}", ctx.assessment.summary(LOCALE))
}

pub(super) fn use_policy(ctx: &DocumentContext<'_>) -> Vec<String> {
    let mut lines = vec![
        "für den Einsatz von Künstlicher Intelligenz im Unternehmen".to_string(),
        String::new(),
    ];
    lines.extend(company_block(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "1. Zweck der Richtlinie",
            "Diese Richtlinie regelt die Nutzung von Systemen der Künstlichen Intelligenz (KI) innerhalb des Unternehmens. Ziel ist es, einen verantwortungsvollen, sicheren und rechtskonformen Einsatz von KI-Anwendungen sicherzustellen.",
            "",
            "Die Richtlinie dient insbesondere:",
            "- der Risikominimierung",
            "- der Einhaltung regulatorischer Anforderungen (u. a. EU AI Act)",
            "- dem Schutz personenbezogener Daten",
            "- der Wahrung von Geschäfts- und Betriebsgeheimnissen",
            "- der Vermeidung haftungsrechtlicher Risiken",
            "",
            "2. Geltungsbereich",
            "Diese Richtlinie gilt für alle Mitarbeitenden, Führungskräfte, freie Mitarbeitende sowie sonstige Personen, die im Namen des Unternehmens KI-Systeme einsetzen.",
            "",
            "Sie umfasst sowohl:",
            "- öffentlich zugängliche KI-Tools (z. B. generative KI-Systeme)",
            "- unternehmensinterne KI-Lösungen",
            "- KI-Funktionen in Drittsoftware",
            "",
            "3. Begriffsbestimmungen",
            "Künstliche Intelligenz (KI): Softwaregestützte Systeme, die Inhalte generieren, Entscheidungen unterstützen oder automatisierte Analysen durchführen.",
            "Generative KI: KI-Systeme, die Texte, Bilder, Code oder sonstige Inhalte erzeugen.",
            "",
            "4. Eingesetzte Systeme und Zweck",
        ]
        .map(str::to_string),
    );
    lines.extend(usage_block(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "5. Zulässige Nutzung",
            "Die Nutzung von KI-Systemen ist grundsätzlich zulässig, sofern:",
            "1. keine vertraulichen oder geheimhaltungsbedürftigen Informationen ungeschützt eingegeben werden",
            "2. keine personenbezogenen Daten ohne Rechtsgrundlage verarbeitet werden",
            "3. Ergebnisse vor externer Verwendung geprüft werden",
            "4. keine diskriminierenden oder rechtswidrigen Inhalte erzeugt oder verbreitet werden",
            "",
            "Die finale Verantwortung für erzeugte Inhalte verbleibt stets beim verantwortlichen Mitarbeitenden.",
            "",
            "6. Verbotene Nutzung",
            "Untersagt ist insbesondere:",
            "- die Eingabe von Betriebs- und Geschäftsgeheimnissen in öffentliche KI-Systeme",
            "- die Verarbeitung sensibler personenbezogener Daten ohne ausdrückliche Freigabe",
            "- der Einsatz von KI zur automatisierten Entscheidungsfindung mit rechtlicher Wirkung ohne gesonderte Prüfung",
            "- die Nutzung von KI zur Erstellung rechtswidriger Inhalte",
            "",
            "7. Datenschutz und Informationssicherheit",
            "Bei der Nutzung von KI-Systemen sind die Vorgaben der DSGVO sowie interne Datenschutzrichtlinien einzuhalten.",
            "",
            "Insbesondere ist sicherzustellen, dass:",
            "- keine besonderen Kategorien personenbezogener Daten verarbeitet werden",
            "- Auftragsverarbeitungsverträge geprüft sind",
            "- Speicherorte und Datenflüsse transparent dokumentiert sind",
            "",
            "8. Transparenz und Dokumentation",
            "Der Einsatz von KI-Systemen ist intern zu dokumentieren. Hierzu gehört insbesondere:",
            "- Bezeichnung des eingesetzten Tools",
            "- Zweck der Nutzung",
            "- Art der verarbeiteten Daten",
            "- Risikobewertung",
            "",
            "9. Risikobewertung und Maßnahmen",
        ]
        .map(str::to_string),
    );
    lines.push(risk_line(ctx));
    lines.push("Verbindliche Maßnahmen:".to_string());
    lines.extend(action_bullets(ctx));
    lines.push(String::new());

    lines.extend(
        [
            "10. Schulung und Sensibilisierung",
            "Mitarbeitende sind regelmäßig über Risiken generativer KI, Datenschutzanforderungen und sichere Nutzung zu informieren.",
            "",
            "11. Verantwortlichkeiten",
            "Die Geschäftsleitung trägt die Gesamtverantwortung für die Einführung und Überwachung dieser Richtlinie. Führungskräfte stellen die Einhaltung im jeweiligen Verantwortungsbereich sicher.",
            "",
            "12. Haftungsausschluss",
            "Diese Richtlinie stellt eine interne Organisationsmaßnahme dar. Sie ersetzt keine individuelle Rechtsberatung.",
            "",
            "13. Inkrafttreten",
            "Diese Richtlinie tritt mit Veröffentlichung in Kraft.",
        ]
        .map(str::to_string),
    );
    lines
}

pub(super) fn transparency_notice(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    let mut lines = vec![
        format!(
            "{} setzt zur Unterstützung einzelner Arbeitsabläufe Systeme der Künstlichen Intelligenz ein.",
            q.company
        ),
        String::new(),
        "Welche Systeme wir einsetzen".to_string(),
        format!("KI-Tools: {}", tool_list(&q.tools)),
        format!("Zweck: {}", or_placeholder(&q.use_case)),
        String::new(),
        "Umgang mit Ihren Daten".to_string(),
        format!(
            "Verarbeitung personenbezogener Daten durch KI: {}",
            q.personal_data.label(LOCALE)
        ),
        "Personenbezogene Daten werden nur im erforderlichen Umfang und auf Grundlage der DSGVO verarbeitet."
            .to_string(),
        String::new(),
        "Menschliche Kontrolle".to_string(),
    ];
    if q.automated_decisions.is_yes() {
        lines.push(
            "KI-gestützte Entscheidungen mit rechtlicher oder ähnlich erheblicher Wirkung werden vor ihrer Umsetzung durch eine verantwortliche Person geprüft. Sie haben das Recht, eine menschliche Überprüfung zu verlangen (Art. 22 DSGVO)."
                .to_string(),
        );
    } else {
        lines.push(
            "Wir treffen keine ausschließlich automatisierten Entscheidungen mit rechtlicher Wirkung. KI-Ergebnisse werden von Mitarbeitenden geprüft."
                .to_string(),
        );
    }
    if q.external_use.is_yes() {
        lines.push(
            "Mit KI erstellte Inhalte, die wir nach außen verwenden, werden vor der Veröffentlichung geprüft und bei Bedarf gekennzeichnet."
                .to_string(),
        );
    }
    lines.extend([
        String::new(),
        "Kontakt".to_string(),
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
    lines.push("Angaben zum KI-Einsatz".to_string());
    lines.extend(usage_block(ctx));
    lines.extend([
        String::new(),
        "Bewertungsschema".to_string(),
        format!(
            "- Personenbezogene Daten ({}): begrenzt +1, regelmäßig +2",
            q.personal_data.label(LOCALE)
        ),
        format!(
            "- Externe Nutzung der Ergebnisse ({}): +2",
            q.external_use.label(LOCALE)
        ),
        format!(
            "- Automatisierte Entscheidungen ({}): +2",
            q.automated_decisions.label(LOCALE)
        ),
        "Einstufung: 0-1 Niedrig, 2-3 Mittel, ab 4 Hoch".to_string(),
        String::new(),
        "Ergebnis".to_string(),
        risk_line(ctx),
        String::new(),
        "Empfohlene Maßnahmen".to_string(),
    ]);
    lines.extend(action_bullets(ctx));
    lines.extend([
        String::new(),
        format!("Bewertet am: {}", ctx.review_date.format("%Y-%m-%d")),
        "Die Selbsteinschätzung ist mindestens jährlich oder bei wesentlichen Änderungen zu wiederholen."
            .to_string(),
        String::new(),
        DISCLAIMER.to_string(),
    ]);
    lines
}

pub(super) fn compliance_summary(ctx: &DocumentContext<'_>) -> Vec<String> {
    let q = ctx.questionnaire;
    let mut lines = vec![
        format!("Unternehmen: {}", q.company),
        format!("Stand: {}", ctx.review_date.format("%Y-%m-%d")),
        "Status: Dokumente erstellt".to_string(),
        String::new(),
        format!("KI-Tools: {}", tool_list(&q.tools)),
        format!("Einsatzzweck: {}", or_placeholder(&q.use_case)),
        risk_line(ctx),
        String::new(),
        "Enthaltene Dokumente".to_string(),
        "- KI-Nutzungsrichtlinie".to_string(),
        "- KI-Transparenzhinweis".to_string(),
        "- KI-Risikoselbsteinschätzung".to_string(),
        "- Internes KI-Verzeichnis (Excel)".to_string(),
        String::new(),
        "Nächste Schritte".to_string(),
    ];
    lines.extend(action_bullets(ctx));
    lines.extend([String::new(), DISCLAIMER.to_string()]);
    lines
}
