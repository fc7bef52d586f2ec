//! Dashboard Page
//!
//! The single-page interactive surface, embedded in the binary and served
//! from `GET /`. The page fetches the JSON prediction endpoints and draws
//! the label panel and chart widgets client-side; recoverable errors come
//! back as 400/404 bodies and are shown as inline warnings.

use axum::response::Html;

/// GET /
///
/// Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Drive Guard</title>
    <style>
      :root {
        --bg: #f6f7f9;
        --panel: #ffffff;
        --text: #1f2937;
        --muted: #6b7280;
        --accent: #2563eb;
        --warn-bg: #fff3cd;
        --warn-border: #ffe69c;
        --border: #e5e7eb;
      }
      body { font-family: "Inter", system-ui, sans-serif; margin: 0; background: var(--bg); color: var(--text); }
      main { max-width: 760px; margin: 0 auto; padding: 24px; }
      h1 { font-size: 26px; margin: 0 0 4px; }
      .subtitle { color: var(--muted); font-size: 14px; margin-bottom: 20px; }

      nav { display: flex; gap: 8px; margin-bottom: 16px; }
      nav button { background: var(--panel); border: 1px solid var(--border); color: var(--muted); padding: 8px 16px; border-radius: 8px; cursor: pointer; font-size: 14px; }
      nav button.active { color: var(--accent); border-color: var(--accent); font-weight: 600; }

      .view { display: none; }
      .view.active { display: block; }

      .card { background: var(--panel); border: 1px solid var(--border); border-radius: 10px; padding: 20px; margin-bottom: 16px; }
      label { display: block; font-size: 13px; color: var(--muted); margin: 12px 0 4px; }
      input[type=text], select { width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid var(--border); border-radius: 6px; font-size: 14px; }
      input[type=range] { width: 100%; }
      .slider-value { font-size: 13px; color: var(--text); font-weight: 600; }
      .action { margin-top: 16px; background: var(--accent); color: #fff; border: none; padding: 10px 20px; border-radius: 8px; font-size: 14px; cursor: pointer; }

      .warning { display: none; background: var(--warn-bg); border: 1px solid var(--warn-border); border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; font-size: 14px; }

      #result { display: none; }
      .class-panel { padding: 20px; border-radius: 8px; border: 1px solid rgba(0,0,0,0.1); text-align: center; margin-bottom: 16px; }
      .class-panel h2 { margin: 0; }

      .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin-bottom: 16px; }
      .metric { background: var(--panel); border: 1px solid var(--border); border-radius: 8px; padding: 12px; }
      .metric .value { font-size: 22px; font-weight: 700; }
      .metric .title { font-size: 12px; color: var(--muted); }

      .charts { display: flex; flex-direction: column; gap: 16px; }
      .chart-card { background: var(--panel); border: 1px solid var(--border); border-radius: 10px; padding: 16px; text-align: center; }
      .chart-title { font-size: 14px; color: var(--muted); margin-bottom: 8px; }
    </style>
  </head>
  <body>
    <main>
      <h1>Drive Guard</h1>
      <div class="subtitle">Enter an insured number to see the driver's predicted driving class and key driving indicators.</div>

      <nav>
        <button id="tab-lookup" class="active" onclick="switchView('lookup')">Predict by Insured ID</button>
        <button id="tab-manual" onclick="switchView('manual')">Manual Input for Risk Class</button>
      </nav>

      <div id="warning" class="warning"></div>

      <div id="view-lookup" class="view active">
        <div class="card">
          <label for="insured-no">Insured number</label>
          <input type="text" id="insured-no" placeholder="e.g. 101" />
          <button class="action" onclick="predictLookup()">Predict</button>
        </div>
      </div>

      <div id="view-manual" class="view">
        <div class="card">
          <label for="day-night">Driving time</label>
          <select id="day-night">
            <option value="day">day</option>
            <option value="night">night</option>
          </select>

          <label for="avg-speed">Avg Speed (km/h): <span id="avg-speed-value" class="slider-value">75</span></label>
          <input type="range" id="avg-speed" min="0" max="150" step="1" value="75" oninput="syncSlider('avg-speed')" />

          <label for="avg-acc">Avg Acceleration: <span id="avg-acc-value" class="slider-value">0.85</span></label>
          <input type="range" id="avg-acc" min="0.5" max="1.2" step="0.01" value="0.85" oninput="syncSlider('avg-acc')" />

          <label for="std-rpm">RPM Standard Deviation: <span id="std-rpm-value" class="slider-value">2250</span></label>
          <input type="range" id="std-rpm" min="500" max="4000" step="50" value="2250" oninput="syncSlider('std-rpm')" />

          <button class="action" onclick="predictManual()">Predict</button>
        </div>
      </div>

      <div id="result">
        <div class="chart-title" style="text-align:left">Predicted Driving Class</div>
        <div id="class-panel" class="class-panel"><h2 id="class-label"></h2></div>
        <div id="metrics" class="metrics"></div>
        <div id="charts" class="charts"></div>
      </div>
    </main>

    <script>
      function switchView(name) {
        for (const view of ['lookup', 'manual']) {
          document.getElementById('view-' + view).classList.toggle('active', view === name);
          document.getElementById('tab-' + view).classList.toggle('active', view === name);
        }
        hideWarning();
      }

      function syncSlider(id) {
        document.getElementById(id + '-value').textContent = document.getElementById(id).value;
      }

      function showWarning(message) {
        const el = document.getElementById('warning');
        el.textContent = message;
        el.style.display = 'block';
        document.getElementById('result').style.display = 'none';
      }

      function hideWarning() {
        document.getElementById('warning').style.display = 'none';
      }

      async function predictLookup() {
        const insuredNo = document.getElementById('insured-no').value;
        const response = await fetch('/api/v1/predict/driver/' + encodeURIComponent(insuredNo));
        await handleResponse(response);
      }

      async function predictManual() {
        const body = {
          day_night: document.getElementById('day-night').value,
          avg_speed: parseFloat(document.getElementById('avg-speed').value),
          avg_acc_total: parseFloat(document.getElementById('avg-acc').value),
          std_rpm: parseFloat(document.getElementById('std-rpm').value),
        };
        const response = await fetch('/api/v1/predict/manual', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body),
        });
        await handleResponse(response);
      }

      async function handleResponse(response) {
        let payload = null;
        try { payload = await response.json(); } catch (e) { /* non-JSON body */ }
        if (!response.ok) {
          showWarning(payload && payload.error ? payload.error.message : 'Request failed');
          return;
        }
        hideWarning();
        renderPrediction(payload);
      }

      function renderPrediction(prediction) {
        document.getElementById('result').style.display = 'block';
        document.getElementById('class-panel').style.backgroundColor = prediction.panel.color;
        document.getElementById('class-label').textContent = prediction.panel.label;

        const metrics = document.getElementById('metrics');
        metrics.innerHTML = '';
        for (const metric of prediction.metrics || []) {
          const card = document.createElement('div');
          card.className = 'metric';
          card.innerHTML = '<div class="value">' + metric.value + '</div>' +
                           '<div class="title">' + metric.title + '</div>';
          metrics.appendChild(card);
        }

        const charts = document.getElementById('charts');
        charts.innerHTML = '';
        for (const chart of prediction.charts) {
          const card = document.createElement('div');
          card.className = 'chart-card';
          const title = document.createElement('div');
          title.className = 'chart-title';
          title.textContent = chart.title;
          const canvas = document.createElement('canvas');
          canvas.width = 360;
          canvas.height = 200;
          card.appendChild(title);
          card.appendChild(canvas);
          charts.appendChild(card);
          if (chart.kind === 'gauge') {
            drawGauge(canvas, chart);
          } else {
            drawBar(canvas, chart);
          }
        }
      }

      function drawGauge(canvas, chart) {
        const ctx = canvas.getContext('2d');
        const cx = canvas.width / 2, cy = canvas.height - 30, radius = 110;
        const fraction = Math.min(Math.max((chart.value - chart.min) / (chart.max - chart.min), 0), 1);

        ctx.lineWidth = 22;
        ctx.lineCap = 'butt';
        ctx.strokeStyle = '#e5e7eb';
        ctx.beginPath();
        ctx.arc(cx, cy, radius, Math.PI, 2 * Math.PI);
        ctx.stroke();

        ctx.strokeStyle = chart.color;
        ctx.beginPath();
        ctx.arc(cx, cy, radius, Math.PI, Math.PI * (1 + fraction));
        ctx.stroke();

        ctx.fillStyle = '#1f2937';
        ctx.font = '600 26px system-ui';
        ctx.textAlign = 'center';
        ctx.fillText(String(chart.value), cx, cy - 10);
        ctx.font = '12px system-ui';
        ctx.fillStyle = '#6b7280';
        ctx.fillText(chart.min, cx - radius, cy + 16);
        ctx.fillText(chart.max, cx + radius, cy + 16);
      }

      function drawBar(canvas, chart) {
        const ctx = canvas.getContext('2d');
        const left = 70, bottom = canvas.height - 24, top = 16;
        const barWidth = 70;
        const fraction = Math.min(Math.max((chart.value - chart.min) / (chart.max - chart.min), 0), 1);
        const barHeight = fraction * (bottom - top);

        ctx.strokeStyle = '#e5e7eb';
        ctx.beginPath();
        ctx.moveTo(left - 8, top);
        ctx.lineTo(left - 8, bottom);
        ctx.lineTo(canvas.width - 20, bottom);
        ctx.stroke();

        ctx.fillStyle = chart.color;
        const barX = (canvas.width - barWidth) / 2;
        ctx.fillRect(barX, bottom - barHeight, barWidth, barHeight);

        ctx.fillStyle = '#1f2937';
        ctx.font = '600 16px system-ui';
        ctx.textAlign = 'center';
        ctx.fillText(String(chart.value), barX + barWidth / 2, bottom - barHeight - 8);
        ctx.font = '12px system-ui';
        ctx.fillStyle = '#6b7280';
        ctx.textAlign = 'right';
        ctx.fillText(chart.max, left - 14, top + 8);
        ctx.fillText(chart.min, left - 14, bottom);
      }
    </script>
  </body>
</html>
"#;
