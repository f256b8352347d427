use credcalc_core::Catalog;

/// Launch the interactive calculator.
///
/// Requires the `tui` feature (default). Without it, points at `quote`.
pub fn execute(catalog: Catalog, plan: Option<&str>) -> anyhow::Result<()> {
    #[cfg(feature = "tui")]
    {
        use anyhow::Context;
        use credcalc_core::session::{DEFAULT_MESSAGES, DEFAULT_MINUTES};

        let session =
            credcalc_core::Session::with_inputs(catalog, plan, DEFAULT_MESSAGES, DEFAULT_MINUTES)
                .context("starting calculator")?;
        crate::tui::run(session)
    }

    #[cfg(not(feature = "tui"))]
    {
        let _ = (catalog, plan);
        anyhow::bail!(
            "credcalc was built without the `tui` feature; use `credcalc quote` instead"
        )
    }
}
