use anyhow::Context;
use credcalc_core::session::{DEFAULT_MESSAGES, DEFAULT_MINUTES};
use credcalc_core::{Catalog, Session, Summary};

pub struct QuoteParams<'a> {
    pub catalog: Catalog,
    pub plan: Option<&'a str>,
    pub messages: Option<&'a str>,
    pub minutes: Option<&'a str>,
    pub json: bool,
}

/// `credcalc quote`
pub fn execute(params: QuoteParams<'_>) -> anyhow::Result<()> {
    let summary = quote(
        params.catalog,
        params.plan,
        params.messages,
        params.minutes,
    )?;
    if params.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }
    Ok(())
}

/// Build a session and apply the raw counts the same way the text fields do.
fn quote(
    catalog: Catalog,
    plan: Option<&str>,
    messages: Option<&str>,
    minutes: Option<&str>,
) -> anyhow::Result<Summary> {
    let known = catalog.ids().collect::<Vec<_>>().join(", ");
    let mut session = Session::with_inputs(catalog, plan, DEFAULT_MESSAGES, DEFAULT_MINUTES)
        .with_context(|| format!("known plans: {known}"))?;
    if let Some(raw) = messages {
        session.set_messages_text(raw);
    }
    if let Some(raw) = minutes {
        session.set_minutes_text(raw);
    }
    Ok(session.summary())
}

fn format_summary(s: &Summary) -> String {
    let mut out = format!(
        "Plan: {} ({}/mo, {} credits)\n\
         Messages: {} of {} = {} credits\n\
         Call minutes: {} of {} = {} credits\n\
         Total consumed: {}\n\
         Remaining: {}\n",
        s.plan_name,
        s.price,
        s.credits,
        s.messages,
        s.max_messages,
        s.message_credits,
        s.minutes,
        s.max_minutes,
        s.call_credits,
        s.total_consumed,
        s.display_remaining,
    );
    if let Some(warning) = s.overage_warning() {
        out.push_str(&format!("\nWarning: {warning}\n"));
    }
    out
}
