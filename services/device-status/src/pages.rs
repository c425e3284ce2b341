//! Server-rendered dashboard pages

use device_model::{detail_path, Device, DeviceReports};

use crate::clock::format_display;

const TITLE: &str = "IoT Device Status";

/// Device list page: one link per device, in store order, plus the report panel
pub fn render_list(devices: &[Device], reports: &DeviceReports, now_ms: u64) -> String {
    let online = devices.iter().filter(|d| d.status).count();

    let device_rows: String = devices
        .iter()
        .map(|d| {
            format!(
                r#"<a href="{href}" class="device-entry" style="display: flex; justify-content: space-between; padding: 0.75rem; border-bottom: 1px solid #dee2e6; color: inherit; text-decoration: none;">
                    <span><strong>{name}</strong> <span style="color: #6c757d;">#{id}</span></span>
                    {badge}
                </a>"#,
                href = detail_path(d.id),
                name = escape_html(&d.name),
                id = d.id,
                badge = status_badge(d.status),
            )
        })
        .collect();

    let report_rows: String = reports
        .iter()
        .map(|(id, report)| {
            format!(
                r#"<li><strong>{}</strong>: {} (last seen: {})</li>"#,
                escape_html(id),
                escape_html(&report.status),
                escape_html(&report.last_seen)
            )
        })
        .collect();

    let report_panel = if reports.is_empty() {
        r#"<p class="empty">No device reports.</p>"#.to_string()
    } else {
        format!("<ul>{}</ul>", report_rows)
    };

    let body = format!(
        r#"<section>
        <h2>Devices <small style="font-weight: normal; color: #6c757d;">({online} of {total} online)</small></h2>
        <div id="device-list" class="device-list">{device_rows}</div>
    </section>
    <section id="device-reports">
        <h2>Device Status</h2>
        {report_panel}
    </section>"#,
        online = online,
        total = devices.len(),
        device_rows = device_rows,
        report_panel = report_panel,
    );

    layout(TITLE, &body, now_ms)
}

/// Detail page for a single device
pub fn render_detail(device: &Device, now_ms: u64) -> String {
    let body = format!(
        r#"<section class="device-detail">
        <h2>{name} Details</h2>
        <p>Device ID: <strong>{id}</strong></p>
        <p>Status: {badge}</p>
        <p>Last updated: {updated}</p>
        {back}
    </section>"#,
        name = escape_html(&device.name),
        id = device.id,
        badge = status_badge(device.status),
        updated = format_display(now_ms),
        back = back_link(),
    );

    layout(&format!("{} - {}", device.name, TITLE), &body, now_ms)
}

/// Shown for ids that don't parse or don't match a device
pub fn render_not_found(raw_id: &str, now_ms: u64) -> String {
    let body = format!(
        r#"<section class="device-detail">
        <h2>Device not found</h2>
        <p>No device with id <strong>{}</strong>.</p>
        {}
    </section>"#,
        escape_html(raw_id),
        back_link()
    );

    layout(&format!("Device not found - {}", TITLE), &body, now_ms)
}

fn layout(title: &str, body: &str, now_ms: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script>
        function refreshClock() {{
            fetch('/api/clock')
                .then(r => r.json())
                .then(data => {{
                    document.getElementById('clock').textContent = data.display;
                }})
                .catch(e => console.error('Error fetching clock:', e));
        }}
        const clockTimer = setInterval(refreshClock, 1000);
        window.addEventListener('pagehide', () => clearInterval(clockTimer));
    </script>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
    <h1>{heading}</h1>
    <form method="post" action="/refresh" style="display: inline;">
        <button type="submit" class="refresh-button" style="padding: 0.5rem 1rem; border: none; border-radius: 0.25rem; background-color: #0d6efd; color: #fff; cursor: pointer;">Refresh status</button>
    </form>
    <p style="color: #6c757d;">Last updated: <span id="clock">{clock}</span></p>
    {body}
</body>
</html>"#,
        title = escape_html(title),
        heading = TITLE,
        clock = format_display(now_ms),
        body = body,
    )
}

fn status_badge(online: bool) -> String {
    let (label, color, bg) = if online {
        ("Online", "#155724", "#d4edda")
    } else {
        ("Offline", "#721c24", "#f8d7da")
    };
    format!(
        r#"<span class="status-{class}" style="display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.85em; font-weight: 600; color: {color}; background-color: {bg};">{label}</span>"#,
        class = label.to_lowercase(),
        color = color,
        bg = bg,
        label = label,
    )
}

fn back_link() -> &'static str {
    r#"<a href="/" class="back-button">Back</a>"#
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
