use crate::models::{ALL_PROVINCES, DashboardSnapshot, DayStatus, DisplayRow, PROVINCES};

pub fn render_index(snapshot: &DashboardSnapshot) -> String {
    let table_filters = snapshot.applied_filters.as_ref().unwrap_or(&snapshot.filters);
    let busy = snapshot.busy;

    INDEX_HTML
        .replace("{{AUTO_RELOAD}}", if busy { AUTO_RELOAD } else { "" })
        .replace("{{PROVINCE_OPTIONS}}", &province_options(&snapshot.filters.province))
        .replace("{{DATE}}", &snapshot.filters.specific_date.to_string())
        .replace("{{BUTTON_STATE}}", if busy { "disabled" } else { "" })
        .replace("{{BUTTON_LABEL}}", if busy { "Carregando..." } else { "Buscar" })
        .replace("{{TOTAL}}", &snapshot.headline.total)
        .replace("{{DEATHS}}", &snapshot.headline.deaths)
        .replace("{{RECOVERED}}", &snapshot.headline.recovered)
        .replace("{{ACTIVE}}", &snapshot.headline.active)
        .replace("{{TABLE_TITLE}}", &table_title(&table_filters.province, &snapshot.range_title))
        .replace("{{ROWS}}", &table_rows(&snapshot.rows))
}

pub fn table_title(province: &str, range_title: &str) -> String {
    if province == ALL_PROVINCES {
        format!("Tabela de Resultados do Nordeste em: ({range_title})")
    } else {
        format!("Tabela de Resultados do estado: {province} entre ({range_title})")
    }
}

fn province_options(selected: &str) -> String {
    let mut html = String::new();
    let all = std::iter::once((ALL_PROVINCES, "Todos os estados"));
    let states = PROVINCES.iter().map(|province| (*province, *province));
    for (value, label) in all.chain(states) {
        let marker = if value == selected { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{value}\"{marker}>{label}</option>\n"));
    }
    html
}

fn table_rows(rows: &[DisplayRow]) -> String {
    if rows.is_empty() {
        return "<tr><td class=\"empty\" colspan=\"5\">Nenhum dado carregado.</td></tr>\n".to_string();
    }

    let mut html = String::new();
    for row in rows {
        let note = match row.status {
            DayStatus::Failed => " <span class=\"badge failed\">falha</span>",
            DayStatus::NoData => " <span class=\"badge\">sem dados</span>",
            DayStatus::Reported => "",
        };
        html.push_str(&format!(
            "<tr><td>{}{note}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.date, row.cases, row.deaths, row.recovered, row.active
        ));
    }
    html
}

const AUTO_RELOAD: &str = r#"<meta http-equiv="refresh" content="2" />"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{AUTO_RELOAD}}
  <title>Painel COVID-19 no Nordeste Brasileiro</title>
  <style>
    :root {
      --bg-1: #f3f4f6;
      --bg-2: #e5e7eb;
      --ink: #1f2937;
      --muted: #4b5563;
      --accent: #3b82f6;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 41, 55, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1120px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    h1 {
      margin: 0;
      text-align: center;
      font-size: clamp(1.6rem, 3vw, 2rem);
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    .filters h2 {
      margin: 0;
    }

    .filters form {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    select,
    input {
      padding: 8px 14px;
      border: 1px solid #d1d5db;
      border-radius: 10px;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 22px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
    }

    button:disabled {
      background: #9ca3af;
      cursor: progress;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.9rem;
      font-weight: 700;
    }

    .stat.total { border-top: 4px solid #3b82f6; }
    .stat.deaths { border-top: 4px solid #ef4444; }
    .stat.recovered { border-top: 4px solid #22c55e; }
    .stat.active { border-top: 4px solid #eab308; }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      padding: 12px 16px;
      text-align: left;
      font-size: 0.9rem;
    }

    th {
      background: #f3f4f6;
    }

    tbody tr:nth-child(even) {
      background: #f9fafb;
    }

    td.empty {
      color: var(--muted);
      text-align: center;
    }

    .badge {
      font-size: 0.75rem;
      padding: 2px 8px;
      border-radius: 999px;
      background: #e5e7eb;
      color: var(--muted);
    }

    .badge.failed {
      background: #fee2e2;
      color: #b91c1c;
    }

    footer {
      text-align: center;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="card">
      <h1>Painel COVID-19 no Nordeste Brasileiro</h1>
    </header>

    <section class="card filters">
      <h2>Filtros de Busca</h2>
      <form id="search-form" method="post" action="/search">
        <label>Estado
          <select name="province">
{{PROVINCE_OPTIONS}}
          </select>
        </label>
        <label>Data específica
          <input type="date" name="specific_date" value="{{DATE}}" required />
        </label>
        <button id="search-btn" type="submit" {{BUTTON_STATE}}>{{BUTTON_LABEL}}</button>
      </form>
    </section>

    <section class="panel">
      <div class="card stat total">
        <span class="label">Total de Casos</span>
        <span class="value">{{TOTAL}}</span>
      </div>
      <div class="card stat deaths">
        <span class="label">Óbitos</span>
        <span class="value">{{DEATHS}}</span>
      </div>
      <div class="card stat recovered">
        <span class="label">Recuperados</span>
        <span class="value">{{RECOVERED}}</span>
      </div>
      <div class="card stat active">
        <span class="label">Ativos</span>
        <span class="value">{{ACTIVE}}</span>
      </div>
    </section>

    <section class="card">
      <h2>{{TABLE_TITLE}}</h2>
      <table>
        <thead>
          <tr>
            <th>Data</th>
            <th>Casos</th>
            <th>Mortes</th>
            <th>Recup.</th>
            <th>Ativos</th>
          </tr>
        </thead>
        <tbody>
{{ROWS}}
        </tbody>
      </table>
    </section>

    <footer class="card">
      Dados fornecidos por <a href="https://covid-api.com/" target="_blank" rel="noopener noreferrer">COVID-API</a>.
    </footer>
  </main>

  <script>
    const form = document.getElementById('search-form');
    const button = document.getElementById('search-btn');

    form.addEventListener('submit', () => {
      button.disabled = true;
      button.textContent = 'Carregando...';
    });
  </script>
</body>
</html>
"#;
