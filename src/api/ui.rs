//! Embedded dashboard page

use axum::{response::Html, routing::get, Router};

use crate::AppState;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Riskdesk</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        header {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 20px;
            margin-bottom: 30px;
        }
        h1 {
            font-size: 26px;
            color: #4a9eff;
        }
        .subtitle {
            color: #888;
            font-size: 16px;
        }
        .content {
            padding: 0 20px 40px;
            max-width: 900px;
        }
        h2 {
            color: #4a9eff;
            margin-top: 20px;
            margin-bottom: 10px;
        }
        .panel {
            background: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 20px;
            margin-bottom: 20px;
        }
        .stats {
            display: flex;
            gap: 30px;
            flex-wrap: wrap;
        }
        .stat-value {
            font-size: 28px;
            font-weight: 600;
        }
        .stat-label {
            color: #888;
            font-size: 13px;
        }
        .risk-high { color: #ef4444; }
        .risk-medium { color: #f59e0b; }
        .risk-low { color: #10b981; }
        .button {
            display: inline-block;
            padding: 10px 20px;
            background: #4a9eff;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            margin: 10px 5px 0 0;
            font-weight: 600;
            font-size: 14px;
            cursor: pointer;
        }
        .button:hover { background: #3a8eef; }
        .button.danger { background: #ef4444; }
        .button.danger:hover { background: #df3434; }
        #status {
            margin-top: 10px;
            font-size: 14px;
            color: #10b981;
        }
        #status.error { color: #ef4444; }
        #categories {
            margin-left: 20px;
            margin-top: 5px;
        }
    </style>
</head>
<body>
    <header>
        <h1>Riskdesk</h1>
        <p class="subtitle">Transaction fraud scoring and reporting</p>
    </header>
    <div class="content">
        <div class="panel">
            <h2>Upload transactions</h2>
            <p>CSV with columns: transaction_id, amount, customer_id, merchant, date, category, location</p>
            <input type="file" id="file-input" accept=".csv">
            <button class="button" onclick="uploadFile()">Upload</button>
            <div id="status"></div>
        </div>

        <div class="panel">
            <h2>Summary</h2>
            <div class="stats">
                <div><div class="stat-value" id="total">0</div><div class="stat-label">Total</div></div>
                <div><div class="stat-value risk-high" id="high">0</div><div class="stat-label">High risk</div></div>
                <div><div class="stat-value risk-medium" id="medium">0</div><div class="stat-label">Medium risk</div></div>
                <div><div class="stat-value risk-low" id="low">0</div><div class="stat-label">Low risk</div></div>
            </div>
            <h2>Spend by category</h2>
            <ul id="categories"></ul>
        </div>

        <div class="panel">
            <h2>Actions</h2>
            <a class="button" href="/api/export/csv">Export CSV</a>
            <a class="button" href="/api/export/pdf">Export PDF</a>
            <button class="button danger" onclick="clearAll()">Clear all</button>
        </div>
    </div>
    <script>
        function setStatus(message, isError) {
            const el = document.getElementById('status');
            el.textContent = message;
            el.className = isError ? 'error' : '';
        }

        async function loadSummary() {
            const response = await fetch('/api/transactions/summary');
            const data = await response.json();
            document.getElementById('total').textContent = data.total_transactions;
            document.getElementById('high').textContent = data.risk_distribution.high;
            document.getElementById('medium').textContent = data.risk_distribution.medium;
            document.getElementById('low').textContent = data.risk_distribution.low;

            const list = document.getElementById('categories');
            list.innerHTML = '';
            for (const [category, amount] of Object.entries(data.amount_by_category)) {
                const item = document.createElement('li');
                item.textContent = category + ': $' + amount.toFixed(2);
                list.appendChild(item);
            }
        }

        async function uploadFile() {
            const input = document.getElementById('file-input');
            if (!input.files.length) {
                setStatus('Choose a CSV file first', true);
                return;
            }
            const text = await input.files[0].text();
            const response = await fetch('/api/upload', {
                method: 'POST',
                headers: { 'Content-Type': 'text/csv' },
                body: text
            });
            const data = await response.json();
            if (!response.ok) {
                setStatus(data.error ? data.error.message : 'Upload failed', true);
                return;
            }
            setStatus(data.message, false);
            loadSummary();
        }

        async function clearAll() {
            const response = await fetch('/api/clear', { method: 'POST' });
            const data = await response.json();
            setStatus(response.ok ? data.message : 'Clear failed', !response.ok);
            loadSummary();
        }

        loadSummary();
    </script>
</body>
</html>
"#;

/// GET /
///
/// Serves the dashboard page
pub async fn serve_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new().route("/", get(serve_dashboard))
}
