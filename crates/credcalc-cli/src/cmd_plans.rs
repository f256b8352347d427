use credcalc_core::{config, Catalog};

/// `credcalc plans`
///
/// `--yaml` prints the catalog in the file format `--catalog` reads, so
/// `credcalc plans --yaml > catalog.yaml` gives a starting point for edits.
pub fn execute(catalog: &Catalog, json: bool, yaml: bool) -> anyhow::Result<()> {
    if yaml {
        print!("{}", config::to_yaml(catalog)?);
    } else if json {
        println!("{}", serde_json::to_string_pretty(&plans_json(catalog))?);
    } else {
        print!("{}", format_plans(catalog));
    }
    Ok(())
}

fn plans_json(catalog: &Catalog) -> serde_json::Value {
    let plans: Vec<serde_json::Value> = catalog
        .plans()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "name": p.name,
                "price": p.price,
                "credits": p.credits,
                "description": p.description,
                "features": p.features,
                "max_messages": p.max_messages(),
                "max_minutes": p.max_minutes(),
                "default": p.id == catalog.default_id(),
            })
        })
        .collect();
    serde_json::Value::Array(plans)
}

/// One line per plan, default marked with `*`.
fn format_plans(catalog: &Catalog) -> String {
    let id_width = catalog.ids().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for p in catalog.plans() {
        let mark = if p.id == catalog.default_id() { '*' } else { ' ' };
        out.push_str(&format!(
            "{mark} {:<id_width$}  {:<8} {:>6}/mo  {:>6} credits  (up to {} messages or {} call minutes)\n",
            p.id,
            p.name,
            p.price,
            p.credits,
            p.max_messages(),
            p.max_minutes(),
        ));
    }
    out
}
