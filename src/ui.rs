pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pimenta da Terra SCS - Controle de Horas</title>
  <style>
    :root {
      --bg: #000000;
      --panel: #0b1220;
      --card: rgba(15, 23, 42, 0.92);
      --border: #334155;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --faint: #64748b;
      --accent: #ef4444;
      --green: #16a34a;
      --yellow: #eab308;
      --blue: #2563eb;
      --red: #dc2626;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      align-items: center;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    header {
      width: 100%;
      padding: 18px;
      text-align: center;
      background: rgba(17, 24, 39, 0.6);
      border-bottom: 1px solid rgba(239, 68, 68, 0.25);
    }

    header h1 {
      margin: 0;
      font-size: 2rem;
      letter-spacing: 0.06em;
      color: var(--accent);
      text-shadow: 0 0 10px rgba(239, 68, 68, 0.4);
    }

    header h2 {
      margin: 4px 0 0;
      font-size: 1.1rem;
      font-weight: 400;
      font-family: "Courier New", monospace;
      color: var(--muted);
    }

    main {
      flex: 1;
      width: 100%;
      max-width: 960px;
      padding: 24px 16px 48px;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 28px;
    }

    .view-switch {
      display: flex;
      gap: 8px;
      padding: 6px;
      background: rgba(17, 24, 39, 0.8);
      border: 1px solid var(--border);
      border-radius: 10px;
    }

    .view-switch button {
      padding: 9px 22px;
      border: none;
      border-radius: 8px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: #1e293b;
      color: var(--muted);
      transition: background 200ms ease, color 200ms ease;
    }

    .view-switch button.active {
      background: var(--accent);
      color: white;
      box-shadow: 0 8px 20px rgba(239, 68, 68, 0.25);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 24px;
      width: 100%;
    }

    .card h3 {
      margin: 0 0 20px;
      text-align: center;
      font-size: 1.4rem;
      color: var(--accent);
    }

    .columns {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 24px;
      width: 100%;
    }

    @media (max-width: 720px) {
      .columns {
        grid-template-columns: 1fr;
      }
    }

    label {
      display: block;
      margin-bottom: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    select,
    input[type="password"] {
      width: 100%;
      padding: 10px;
      border-radius: 8px;
      border: 1px solid var(--border);
      background: #0f172a;
      color: var(--ink);
      font-size: 0.95rem;
    }

    .banner {
      display: none;
      margin-bottom: 14px;
      padding: 10px 12px;
      border-radius: 8px;
      border: 1px solid rgba(239, 68, 68, 0.35);
      background: rgba(239, 68, 68, 0.15);
      color: #fca5a5;
      font-size: 0.9rem;
      text-align: center;
    }

    .banner.visible {
      display: block;
    }

    .punch-grid {
      margin-top: 18px;
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .punch-grid button {
      padding: 16px 10px;
      border: none;
      border-radius: 10px;
      font-size: 1rem;
      font-weight: 700;
      color: white;
      cursor: pointer;
      transition: filter 150ms ease;
    }

    .punch-grid button:hover:enabled {
      filter: brightness(1.15);
    }

    .punch-grid button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .punch-entrada { background: var(--green); }
    .punch-saida-almoco { background: var(--yellow); color: #111827; }
    .punch-entrada-almoco { background: var(--blue); }
    .punch-saida { background: var(--red); }

    .punch-list {
      background: rgba(0, 0, 0, 0.5);
      border-radius: 10px;
      min-height: 220px;
      max-height: 280px;
      overflow-y: auto;
      padding: 14px;
    }

    .punch-list ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: flex;
      flex-direction: column;
      gap: 10px;
    }

    .punch-list li {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 12px;
      border-radius: 8px;
      background: rgba(31, 41, 55, 0.6);
    }

    .punch-list .time {
      font-family: "Courier New", monospace;
      font-size: 1.05rem;
      background: #111827;
      padding: 3px 8px;
      border-radius: 6px;
    }

    .placeholder {
      display: flex;
      align-items: center;
      justify-content: center;
      min-height: 190px;
      color: var(--faint);
      text-align: center;
    }

    .total-box {
      background: rgba(0, 0, 0, 0.5);
      border-radius: 10px;
      padding: 26px;
      text-align: center;
    }

    .total-box .caption {
      margin: 0 0 10px;
      color: var(--muted);
      font-size: 1rem;
    }

    .total-box .value {
      margin: 0;
      font-size: 3.2rem;
      font-weight: 700;
      color: var(--accent);
      letter-spacing: -0.03em;
    }

    .total-box .empty {
      margin: 8px 0 0;
      font-size: 1.3rem;
      color: var(--faint);
    }

    .form-row {
      margin-bottom: 16px;
    }

    .primary-btn {
      width: 100%;
      padding: 11px;
      border: none;
      border-radius: 8px;
      background: var(--accent);
      color: white;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .primary-btn:hover {
      filter: brightness(1.15);
    }

    .link-btn {
      margin-top: 18px;
      border: none;
      background: none;
      color: var(--faint);
      font-size: 0.85rem;
      cursor: pointer;
      text-decoration: underline;
    }

    .narrow {
      max-width: 420px;
      margin: 0 auto;
    }

    .dash-selects {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
      margin-bottom: 24px;
    }

    @media (max-width: 560px) {
      .dash-selects {
        grid-template-columns: 1fr;
      }
    }

    .loading {
      text-align: center;
      color: var(--muted);
      padding: 30px 0;
    }

    .hidden {
      display: none !important;
    }

    footer {
      width: 100%;
      padding: 16px;
      text-align: center;
      color: var(--faint);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <header>
    <h1>Pimenta da Terra SCS</h1>
    <h2>Controle de Horas</h2>
  </header>

  <main>
    <div class="view-switch">
      <button id="tab-clock" class="active" type="button">Registro de Ponto</button>
      <button id="tab-dash" type="button">Dashboard</button>
    </div>

    <!-- Punch clock view -->
    <section id="view-clock" class="columns">
      <div class="card">
        <h3>Registrar Ponto</h3>
        <div id="clock-error" class="banner"></div>
        <div id="clock-loading" class="loading">Carregando dados...</div>
        <div id="clock-form" class="hidden">
          <div class="form-row">
            <label for="employee-select">Colaborador</label>
            <select id="employee-select"></select>
          </div>
          <div class="punch-grid">
            <button class="punch-entrada" data-type="Entrada" type="button">Entrada</button>
            <button class="punch-saida-almoco" data-type="Saída Almoço" type="button">Saída Almoço</button>
            <button class="punch-entrada-almoco" data-type="Entrada Almoço" type="button">Entrada Almoço</button>
            <button class="punch-saida" data-type="Saída" type="button">Saída</button>
          </div>
        </div>
      </div>
      <div class="card">
        <h3>Hoje</h3>
        <div id="punch-list" class="punch-list">
          <div class="placeholder">Nenhuma batida registrada hoje.</div>
        </div>
      </div>
    </section>

    <!-- Dashboard view -->
    <section id="view-dash" class="hidden" style="width: 100%">
      <div id="dash-locked" class="card narrow">
        <h3>Acesso Restrito</h3>
        <form id="login-form">
          <div class="form-row">
            <label for="password-input">Senha</label>
            <input type="password" id="password-input" required />
          </div>
          <div id="auth-error" class="banner"></div>
          <button class="primary-btn" type="submit">Entrar</button>
        </form>
      </div>

      <div id="dash-ready" class="card hidden">
        <h3>Dashboard de Horas</h3>
        <div id="dash-error" class="banner"></div>
        <div id="dash-loading" class="loading">Carregando dados do dashboard...</div>
        <div id="dash-content" class="hidden">
          <div class="dash-selects">
            <div>
              <label for="dash-employee">Colaborador</label>
              <select id="dash-employee"></select>
            </div>
            <div>
              <label for="dash-month">Mês</label>
              <select id="dash-month"></select>
            </div>
          </div>
          <div class="total-box">
            <p class="caption">Total de Horas Acumuladas</p>
            <div id="dash-total"></div>
          </div>
          <button id="logout-btn" class="link-btn" type="button">Sair do dashboard</button>
        </div>
      </div>
    </section>
  </main>

  <footer>Pimenta da Terra SCS</footer>

  <script>
    const el = (id) => document.getElementById(id);

    const tabClock = el('tab-clock');
    const tabDash = el('tab-dash');
    const viewClock = el('view-clock');
    const viewDash = el('view-dash');

    const clock = {
      employees: [],
      selected: '',
      punches: [],
      submitting: null,
      fetchSeq: 0,
    };

    const dash = {
      authenticated: false,
      loaded: false,
      employees: [],
      months: [],
      rows: [],
      employee: '',
      month: '',
    };

    const showBanner = (id, message) => {
      const banner = el(id);
      banner.textContent = message || '';
      banner.classList.toggle('visible', Boolean(message));
    };

    const getJson = async (path) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const postJson = async (path, payload) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload || {}),
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    // ---- punch clock view ----

    const renderPunches = () => {
      const box = el('punch-list');
      if (!clock.punches.length) {
        const who = clock.selected ? ' para ' + clock.selected : '';
        box.innerHTML = '<div class="placeholder">Nenhuma batida registrada hoje' + who + '.</div>';
        return;
      }
      const list = document.createElement('ul');
      for (const punch of clock.punches) {
        const item = document.createElement('li');
        const kind = document.createElement('span');
        kind.textContent = punch.type;
        const time = document.createElement('span');
        time.className = 'time';
        time.textContent = punch.time;
        item.append(kind, time);
        list.appendChild(item);
      }
      box.replaceChildren(list);
    };

    const setPunchButtons = () => {
      const disabled = !clock.selected || Boolean(clock.submitting);
      for (const button of viewClock.querySelectorAll('.punch-grid button')) {
        button.disabled = disabled;
        button.textContent =
          clock.submitting === button.dataset.type ? 'Registrando...' : button.dataset.type;
      }
    };

    // Each read carries a token; a response that is no longer the newest is
    // dropped, so a slow fetch cannot overwrite a later selection's list.
    const loadPunches = async () => {
      if (!clock.selected) {
        clock.punches = [];
        renderPunches();
        return;
      }
      const token = ++clock.fetchSeq;
      try {
        showBanner('clock-error', '');
        const punches = await getJson('/api/punches?name=' + encodeURIComponent(clock.selected));
        if (token !== clock.fetchSeq) {
          return;
        }
        clock.punches = punches;
        renderPunches();
      } catch (err) {
        if (token !== clock.fetchSeq) {
          return;
        }
        console.error(err);
        showBanner('clock-error', 'Falha ao carregar as batidas do dia.');
      }
    };

    const loadRoster = async () => {
      try {
        showBanner('clock-error', '');
        clock.employees = await getJson('/api/employees');
        if (clock.employees.length) {
          clock.selected = clock.employees[0];
        }
        const select = el('employee-select');
        select.replaceChildren(
          ...clock.employees.map((name) => new Option(name, name, false, name === clock.selected))
        );
        el('clock-loading').classList.add('hidden');
        el('clock-form').classList.remove('hidden');
        setPunchButtons();
        await loadPunches();
      } catch (err) {
        console.error(err);
        el('clock-loading').classList.add('hidden');
        showBanner(
          'clock-error',
          'Falha ao carregar colaboradores. Verifique a URL do Apps Script e a sua planilha.'
        );
      }
    };

    const punch = async (type) => {
      if (!clock.selected) {
        showBanner('clock-error', 'Por favor, selecione um colaborador.');
        return;
      }
      if (clock.submitting) {
        showBanner('clock-error', 'Aguarde o registro em andamento.');
        return;
      }
      clock.submitting = type;
      setPunchButtons();
      showBanner('clock-error', '');
      try {
        const outcome = await postJson('/api/punch', { name: clock.selected, type });
        clock.fetchSeq += 1;
        clock.punches = outcome.punches;
        renderPunches();
      } catch (err) {
        console.error(err);
        showBanner('clock-error', 'Falha ao registrar o ponto. Tente novamente.');
      } finally {
        clock.submitting = null;
        setPunchButtons();
      }
    };

    el('employee-select').addEventListener('change', (event) => {
      clock.selected = event.target.value;
      setPunchButtons();
      loadPunches();
    });

    for (const button of viewClock.querySelectorAll('.punch-grid button')) {
      button.addEventListener('click', () => punch(button.dataset.type));
    }

    // ---- dashboard view ----

    const renderTotal = () => {
      const target = el('dash-total');
      const row = dash.rows.find(
        (entry) => entry.employee === dash.employee && entry.monthYear === dash.month
      );
      if (row) {
        target.innerHTML = '<p class="value">' + row.totalHours + '</p>';
      } else {
        target.innerHTML = '<p class="empty">Nenhum dado encontrado para a seleção.</p>';
      }
    };

    const renderDashboard = () => {
      el('dash-employee').replaceChildren(
        ...dash.employees.map((name) => new Option(name, name, false, name === dash.employee))
      );
      el('dash-month').replaceChildren(
        ...dash.months.map((month) => new Option(month, month, false, month === dash.month))
      );
      el('dash-month').disabled = !dash.months.length;
      renderTotal();
    };

    const loadDashboard = async () => {
      el('dash-locked').classList.add('hidden');
      el('dash-ready').classList.remove('hidden');
      if (dash.loaded) {
        return;
      }
      el('dash-loading').classList.remove('hidden');
      el('dash-content').classList.add('hidden');
      try {
        showBanner('dash-error', '');
        const data = await getJson('/api/dashboard');
        dash.employees = data.employees;
        dash.months = data.months;
        dash.rows = data.worked_hours;
        if (!dash.employee && dash.employees.length) {
          dash.employee = dash.employees[0];
        }
        if (!dash.month && dash.months.length) {
          dash.month = dash.months[0];
        }
        dash.loaded = true;
        el('dash-loading').classList.add('hidden');
        el('dash-content').classList.remove('hidden');
        renderDashboard();
      } catch (err) {
        console.error(err);
        el('dash-loading').classList.add('hidden');
        showBanner(
          'dash-error',
          'Falha ao carregar dados do dashboard. Verifique a URL do Apps Script e a sua planilha.'
        );
      }
    };

    el('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        showBanner('auth-error', '');
        await postJson('/api/login', { password: el('password-input').value });
        dash.authenticated = true;
        el('password-input').value = '';
        await loadDashboard();
      } catch (err) {
        console.error(err);
        showBanner('auth-error', 'Senha incorreta.');
      }
    });

    el('logout-btn').addEventListener('click', async () => {
      try {
        await postJson('/api/logout');
      } catch (err) {
        console.error(err);
      }
      dash.authenticated = false;
      dash.loaded = false;
      el('dash-ready').classList.add('hidden');
      el('dash-locked').classList.remove('hidden');
    });

    el('dash-employee').addEventListener('change', (event) => {
      dash.employee = event.target.value;
      renderTotal();
    });

    el('dash-month').addEventListener('change', (event) => {
      dash.month = event.target.value;
      renderTotal();
    });

    // ---- view switch ----

    const setView = (view) => {
      const clockActive = view === 'clock';
      tabClock.classList.toggle('active', clockActive);
      tabDash.classList.toggle('active', !clockActive);
      viewClock.classList.toggle('hidden', !clockActive);
      viewDash.classList.toggle('hidden', clockActive);
      if (!clockActive && dash.authenticated) {
        loadDashboard();
      }
    };

    tabClock.addEventListener('click', () => setView('clock'));
    tabDash.addEventListener('click', () => setView('dash'));

    // A live session from a previous load of this page skips the password.
    const checkSession = async () => {
      try {
        const status = await getJson('/api/session');
        dash.authenticated = Boolean(status.authenticated);
      } catch (err) {
        console.error(err);
      }
    };

    checkSession();
    loadRoster();
  </script>
</body>
</html>
"##;
