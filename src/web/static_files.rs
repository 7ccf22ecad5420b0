//! Embedded assets for the advisory page.
//!
//! The page is embedded directly in the binary for easy deployment.

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};

/// CSS styles for the advisory page.
pub const CSS: &str = r#"
:root {
    --bg-primary: #0f1a12;
    --bg-secondary: #16251a;
    --bg-tertiary: #1f3325;
    --text-primary: #ecf5ee;
    --text-secondary: #94ac99;
    --accent: #4ade80;
    --accent-hover: #22c55e;
    --error: #ef4444;
    --border: #2e4636;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    line-height: 1.6;
}

.container {
    max-width: 760px;
    margin: 0 auto;
    padding: 20px;
}

header {
    background: var(--bg-secondary);
    border-bottom: 1px solid var(--border);
    padding: 15px 0;
    margin-bottom: 30px;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent);
}

.logo span {
    color: var(--text-primary);
}

.tagline {
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.card {
    background: var(--bg-secondary);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 25px;
    margin-bottom: 25px;
}

.card h2 {
    font-size: 1rem;
    color: var(--text-secondary);
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 15px;
}

textarea {
    width: 100%;
    min-height: 90px;
    background: var(--bg-tertiary);
    border: 1px solid var(--border);
    border-radius: 6px;
    color: var(--text-primary);
    padding: 12px;
    font-size: 1rem;
    resize: vertical;
}

textarea:focus {
    outline: none;
    border-color: var(--accent);
}

.btn {
    display: inline-block;
    background: var(--accent);
    color: var(--bg-primary);
    border: none;
    border-radius: 6px;
    padding: 10px 22px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    margin-top: 12px;
}

.btn:hover {
    background: var(--accent-hover);
}

input[type="file"] {
    color: var(--text-secondary);
}

.preview img {
    max-width: 240px;
    margin-top: 12px;
    border-radius: 6px;
    border: 1px solid var(--border);
}

.answer-text {
    white-space: pre-wrap;
}

.chart-title {
    color: var(--text-secondary);
    font-size: 0.9rem;
    margin: 15px 0 5px;
}

canvas {
    width: 100%;
    background: var(--bg-tertiary);
    border: 1px solid var(--border);
    border-radius: 6px;
}

.sources {
    margin-top: 12px;
    font-size: 0.85rem;
    color: var(--text-secondary);
}

.sources a {
    color: var(--accent);
}

.error {
    color: var(--error);
}

.hidden {
    display: none;
}
"#;

/// JavaScript for the advisory page.
pub const APP_JS: &str = r#"
// ============================================================================
// Photo upload
// ============================================================================

async function uploadImage() {
    var input = document.getElementById('photo-input');
    var preview = document.getElementById('photo-preview');
    if (!input.files.length) {
        return;
    }

    var form = new FormData();
    form.append('image', input.files[0]);

    try {
        var response = await fetch('/upload_image', { method: 'POST', body: form });
        var result = await response.json();
        if (!response.ok) {
            preview.innerHTML = '<p class="error">' + escapeHtml(result.error || 'Upload failed') + '</p>';
            return;
        }
        preview.innerHTML = '<img src="' + result.path + '" alt="uploaded crop photo">';
    } catch (error) {
        preview.innerHTML = '<p class="error">' + escapeHtml(error.message) + '</p>';
    }
}

// ============================================================================
// Query submission
// ============================================================================

async function submitQuery() {
    var text = document.getElementById('query-input').value;
    var card = document.getElementById('answer-card');
    var answer = document.getElementById('answer-text');
    var chartTitle = document.getElementById('chart-title');
    var canvas = document.getElementById('chart-canvas');
    var sources = document.getElementById('sources');

    card.classList.remove('hidden');
    chartTitle.classList.add('hidden');
    canvas.classList.add('hidden');
    sources.innerHTML = '';

    try {
        var response = await fetch('/submit_query', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ text: text })
        });
        var result = await response.json();
        if (!response.ok) {
            answer.innerHTML = '<span class="error">' + escapeHtml(result.error || 'Request failed') + '</span>';
            return;
        }

        answer.textContent = result.text;

        if (result.chart) {
            chartTitle.textContent = result.chart.title + ' (' + result.chart.unit + ')';
            chartTitle.classList.remove('hidden');
            canvas.classList.remove('hidden');
            drawLineChart(canvas, result.chart.data);
        }

        if (result.sources) {
            sources.innerHTML = 'Sources: ' + result.sources.map(function (s) {
                return '<a href="' + s.uri + '">' + escapeHtml(s.title) + '</a>';
            }).join(', ');
        }
    } catch (error) {
        answer.innerHTML = '<span class="error">' + escapeHtml(error.message) + '</span>';
    }
}

// ============================================================================
// Chart rendering
// ============================================================================

function drawLineChart(canvas, points) {
    canvas.width = canvas.clientWidth;
    canvas.height = 220;
    var ctx = canvas.getContext('2d');
    ctx.clearRect(0, 0, canvas.width, canvas.height);

    var pad = 40;
    var w = canvas.width - 2 * pad;
    var h = canvas.height - 2 * pad;
    var values = points.map(function (p) { return p.value; });
    var min = Math.min.apply(null, values);
    var max = Math.max.apply(null, values);
    var span = max - min || 1;

    function x(i) { return pad + (w * i) / (points.length - 1); }
    function y(v) { return pad + h - (h * (v - min)) / span; }

    ctx.strokeStyle = '#4ade80';
    ctx.lineWidth = 2;
    ctx.beginPath();
    points.forEach(function (p, i) {
        if (i === 0) { ctx.moveTo(x(i), y(p.value)); } else { ctx.lineTo(x(i), y(p.value)); }
    });
    ctx.stroke();

    ctx.fillStyle = '#94ac99';
    ctx.font = '11px sans-serif';
    ctx.textAlign = 'center';
    points.forEach(function (p, i) {
        ctx.fillText(p.label, x(i), canvas.height - 12);
        ctx.fillText(String(p.value), x(i), y(p.value) - 8);
    });
}

// ============================================================================
// Utilities
// ============================================================================

function escapeHtml(text) {
    var div = document.createElement('div');
    div.textContent = text;
    return div.innerHTML;
}

document.addEventListener('DOMContentLoaded', function () {
    document.getElementById('photo-input').addEventListener('change', uploadImage);
    document.getElementById('ask-btn').addEventListener('click', submitQuery);
    document.getElementById('query-input').addEventListener('keydown', function (e) {
        if (e.key === 'Enter' && !e.shiftKey) {
            e.preventDefault();
            submitQuery();
        }
    });
});
"#;

/// HTML for the advisory page.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Krishi-Sahayak</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <header>
        <div class="container">
            <div class="logo">Krishi<span>-Sahayak</span></div>
            <div class="tagline">Agricultural advisory for your crops, soil, and markets</div>
        </div>
    </header>

    <div class="container">
        <div class="card">
            <h2>Crop photo (optional)</h2>
            <input type="file" id="photo-input" accept=".png,.jpg,.jpeg,.webp">
            <div class="preview" id="photo-preview"></div>
        </div>

        <div class="card">
            <h2>Your question</h2>
            <textarea id="query-input" placeholder="e.g. What is the market price of wheat?"></textarea>
            <button class="btn" id="ask-btn">Ask</button>
        </div>

        <div class="card hidden" id="answer-card">
            <h2>Advice</h2>
            <p class="answer-text" id="answer-text"></p>
            <p class="chart-title hidden" id="chart-title"></p>
            <canvas id="chart-canvas" class="hidden"></canvas>
            <div class="sources" id="sources"></div>
        </div>
    </div>

    <script src="/app.js"></script>
</body>
</html>
"#;

/// Serve the main advisory page.
pub async fn serve_index() -> impl IntoResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(INDEX_HTML))
        .unwrap()
}

/// Serve the CSS.
pub async fn serve_css() -> impl IntoResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/css; charset=utf-8")
        .body(Body::from(CSS))
        .unwrap()
}

/// Serve the JavaScript.
pub async fn serve_app_js() -> impl IntoResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/javascript; charset=utf-8")
        .body(Body::from(APP_JS))
        .unwrap()
}
