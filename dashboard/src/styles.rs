//! CSS for the dashboard document.
//!
//! Inlined into the rendered HTML so the page works as a standalone file.
//! Includes the reveal transition and ripple keyframes driven by the
//! enrichment layer, and print rules that strip the toolbar.
//!
//! Cards are visible by default; `.is-revealed` only adds an entrance
//! animation. A runtime without visibility observation skips the reveal and
//! still shows every card.

/// Complete CSS for the dashboard page.
pub const DASHBOARD_CSS: &str = r#"
:root {
    --bg: #0d1117;
    --bg-raised: #161b22;
    --fg: #c9d1d9;
    --fg-muted: #8b949e;
    --fg-bright: #f0f6fc;
    --border: #30363d;
    --accent: #58a6ff;
    --green: #3fb950;
    --red: #f85149;
    --mono: 'JetBrains Mono', 'Fira Code', monospace;
    --sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
    --radius: 8px;
}

*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: var(--sans);
    background: var(--bg);
    color: var(--fg);
    line-height: 1.6;
    padding: 1.5rem;
}

.dashboard-header {
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-bottom: 1.25rem;
}
.dashboard-header h1 {
    color: var(--fg-bright);
    font-size: 1.3rem;
    font-weight: 700;
    letter-spacing: -0.02em;
}

.dashboard-toolbar { display: flex; gap: 0.5rem; }
.toolbar-btn {
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.75rem;
    padding: 0.35rem 0.8rem;
    transition: border-color 0.2s ease, color 0.2s ease;
}
.toolbar-btn:hover { border-color: var(--accent); color: var(--fg-bright); }

.kpi-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 0.75rem;
}

.kpi-card {
    position: relative;
    overflow: hidden;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 0.85rem 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.2rem;
    cursor: pointer;
}
.kpi-card.is-revealed { animation: kpi-reveal 0.5s ease; }
@keyframes kpi-reveal {
    from { opacity: 0; transform: translateY(14px); }
    to   { opacity: 1; transform: none; }
}

.kpi-label {
    font-size: 0.72rem;
    color: var(--fg-muted);
    text-transform: uppercase;
    letter-spacing: 0.04em;
}
.kpi-value {
    font-family: var(--mono);
    font-size: 1.4rem;
    font-weight: 700;
    color: var(--fg-bright);
}
.kpi-variation { font-family: var(--mono); font-size: 0.78rem; }
.kpi-variation.positive { color: var(--green); }
.kpi-variation.negative { color: var(--red); }

.kpi-ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(88, 166, 255, 0.25);
    pointer-events: none;
    transform: scale(0);
    animation: kpi-ripple 600ms ease-out forwards;
}
@keyframes kpi-ripple {
    to { transform: scale(2.5); opacity: 0; }
}

@media print {
    body { background: #fff; color: #111; padding: 0; }
    .dashboard-toolbar { display: none; }
    .kpi-card { border: 1px solid #ccc; break-inside: avoid; }
    .kpi-value { color: #111; }
}
"#;
