//! Server-side rendering of the single portfolio page.
//!
//! Sections render in page order: hero, summary, skills, experience,
//! education, coursework, then the contact dialog and feedback bar.
//! Every dynamic string goes through `escape_html`.

use std::fmt::{self, Write as _};

use crate::models::profile::Profile;
use crate::render::assets::StaticAssets;
use crate::render::feedback::{self, DEFAULT_RATING, MAX_RATING, MIN_RATING};

const STYLES: &str = r#"
:root{--bg0:#050814;--bg1:#03040b;--card:rgba(255,255,255,0.06);--border:rgba(255,255,255,0.12);
--text:rgba(255,255,255,0.92);--muted:rgba(255,255,255,0.70);--accent1:#6366f1;--accent2:#ec4899;--accent3:#22d3ee;}
body{margin:0;color:var(--text);font-family:"Space Grotesk",sans-serif;
background:radial-gradient(900px 520px at 15% 10%,rgba(99,102,241,0.24),transparent 60%),
radial-gradient(850px 520px at 85% 20%,rgba(236,72,153,0.18),transparent 55%),
linear-gradient(180deg,var(--bg0) 0%,var(--bg1) 100%);min-height:100vh;}
main{max-width:1160px;margin:0 auto;padding:0 16px 8rem;}
a{color:var(--accent3);}
.hero{background:linear-gradient(180deg,rgba(255,255,255,0.075),rgba(255,255,255,0.045));border:1px solid var(--border);
border-radius:22px;padding:14px 18px 16px;display:flex;align-items:center;justify-content:space-between;gap:16px;flex-wrap:wrap;}
.hero-left{display:flex;align-items:center;gap:14px;min-width:0;}
.profile-img{width:210px;height:220px;border-radius:50%;object-fit:cover;border:2px solid var(--border);}
.name{font-family:"Playfair Display",serif;font-size:38px;font-weight:700;}
.subtitle{color:var(--muted);font-size:18px;margin-top:4px;}
.meta{margin-top:8px;color:var(--muted);}
.pills{margin-top:10px;display:flex;flex-wrap:wrap;gap:8px;}
.pill{padding:4px 10px;border-radius:999px;border:1px solid var(--border);background:var(--card);font-size:12px;}
.hero-actions{display:flex;flex-direction:column;gap:10px;}
.btn{display:inline-block;padding:.6rem 1rem;border-radius:12px;border:1px solid var(--border);
background:linear-gradient(90deg,var(--accent1),var(--accent2));color:#fff;font-weight:700;text-decoration:none;cursor:pointer;}
.btn[disabled]{opacity:.45;cursor:not-allowed;}
.notice{color:#fbbf24;}
.section-header{font-size:22px;font-weight:700;margin:28px 0 12px;}
.glass,.skill-card,.t-card,.edu-card{background:var(--card);border:1px solid var(--border);border-radius:16px;padding:14px 16px;}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:14px;}
.skill-title{font-weight:800;margin-bottom:8px;}
.skill-row{margin:8px 0;}
.skill-label{display:flex;justify-content:space-between;font-size:13px;color:var(--muted);}
.bar{height:8px;border-radius:999px;background:rgba(255,255,255,0.08);overflow:hidden;margin-top:4px;}
.bar>div{height:100%;width:var(--w);background:linear-gradient(90deg,var(--accent1),var(--accent3));}
.timeline{border-left:2px solid var(--border);padding-left:18px;display:flex;flex-direction:column;gap:14px;}
.t-top{display:flex;justify-content:space-between;gap:10px;flex-wrap:wrap;}
.t-role{font-weight:800;}
.t-meta,.t-sub{color:var(--muted);font-size:13px;}
.edu-degree{font-weight:900;font-size:15px;}
.edu-school{margin-top:6px;color:rgba(255,255,255,0.75);font-size:13px;}
.edu-extra{margin-top:10px;color:var(--muted);font-size:13px;}
.sticky-cta{position:fixed;right:16px;bottom:76px;z-index:9998;}
.sticky-cta .btn{border-radius:999px;}
dialog{background:#0b1020;color:var(--text);border:1px solid var(--border);border-radius:18px;max-width:420px;width:90%;}
dialog label{display:block;margin-top:10px;font-size:13px;color:var(--muted);}
dialog input,dialog textarea{width:100%;box-sizing:border-box;margin-top:4px;padding:8px;border-radius:10px;
border:1px solid var(--border);background:rgba(255,255,255,0.05);color:var(--text);}
.form-status{margin-top:10px;font-size:14px;white-space:pre-wrap;}
.form-status.error{color:#f87171;}
.form-status.ok{color:#34d399;}
.feedback-bar{position:fixed;left:0;right:0;bottom:0;padding:10px 14px;background:rgba(0,0,0,0.55);
border-top:1px solid var(--border);z-index:9999;}
.feedback-inner{max-width:1160px;margin:0 auto;display:flex;align-items:center;gap:14px;flex-wrap:wrap;}
.feedback-emoji{font-size:26px;}
"#;

const SCRIPT: &str = r#"
(function () {
  const dialog = document.getElementById("contact-dialog");
  const form = document.getElementById("contact-form");
  const status = document.getElementById("contact-status");
  let sessionId = null;

  document.getElementById("open-contact").addEventListener("click", () => dialog.showModal());
  document.getElementById("close-contact").addEventListener("click", () => dialog.close());

  async function ensureSession() {
    if (sessionId) return sessionId;
    const res = await fetch("/api/v1/sessions", { method: "POST" });
    sessionId = (await res.json()).session_id;
    return sessionId;
  }

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    status.className = "form-status";
    status.textContent = "Sending…";
    const data = new FormData(form);
    try {
      const id = await ensureSession();
      const res = await fetch(`/api/v1/sessions/${id}/contact`, {
        method: "POST",
        headers: { "content-type": "application/json" },
        body: JSON.stringify({
          email: data.get("email"),
          phone: data.get("phone"),
          notes: data.get("notes"),
        }),
      });
      const body = await res.json();
      if (res.status === 201) {
        status.className = "form-status ok";
        status.textContent = body.message;
        form.reset();
      } else if (res.status === 202) {
        status.className = "form-status error";
        status.textContent = body.message + "\nError: " + body.error;
        form.reset();
      } else {
        status.className = "form-status error";
        status.textContent = body.error ? body.error.message : "Something went wrong.";
      }
    } catch (err) {
      status.className = "form-status error";
      status.textContent = String(err);
    }
  });

  const slider = document.getElementById("feedback-rating");
  const scale = JSON.parse(slider.dataset.scale);
  const emoji = document.getElementById("feedback-emoji");
  const caption = document.getElementById("feedback-caption");
  slider.addEventListener("input", () => {
    const entry = scale.find((s) => s.rating === Number(slider.value));
    if (!entry) return;
    emoji.textContent = entry.emoji;
    caption.textContent = `You selected ${entry.rating} — ${entry.label}`;
  });
})();
"#;

/// Minimal HTML escaping for text and double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(profile: &Profile, assets: &StaticAssets) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(32 * 1024);

    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
<title>{} | Portfolio</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n",
        escape_html(&title_name(profile.full_name)),
        STYLES
    )?;

    render_hero(&mut html, profile, assets)?;
    render_summary(&mut html, profile)?;
    render_skills(&mut html, profile)?;
    render_experience(&mut html, profile)?;
    render_education(&mut html, profile)?;
    render_coursework(&mut html, profile)?;

    html.push_str("</main>\n");
    render_contact_dialog(&mut html);
    render_feedback_bar(&mut html)?;

    write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n")?;
    Ok(html)
}

/// "MAHESH BABU BALISETTI" → "Mahesh Babu"; used for the tab title.
fn title_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_hero(html: &mut String, profile: &Profile, assets: &StaticAssets) -> fmt::Result {
    html.push_str("<section class=\"hero\">\n<div class=\"hero-left\">\n");

    match &assets.profile_image_b64 {
        Some(b64) => {
            writeln!(
                html,
                "<img class=\"profile-img\" alt=\"Profile photo\" src=\"data:image/jpeg;base64,{b64}\"/>"
            )?;
        }
        None => {
            writeln!(
                html,
                "<div class=\"notice\">Profile photo not found. Put it here: {}</div>",
                escape_html(&assets.profile_image_hint)
            )?;
        }
    }

    writeln!(
        html,
        "<div class=\"hero-text\">\n<div class=\"name\">{}</div>\n<div class=\"subtitle\">{}</div>\n\
<div class=\"meta\">📧 <a href=\"mailto:{email}\">{email}</a> &nbsp; | &nbsp; 📞 {}</div>",
        escape_html(profile.full_name),
        escape_html(profile.role),
        escape_html(profile.phone),
        email = escape_html(profile.email),
    )?;

    html.push_str("<div class=\"pills\">");
    for pill in profile.pills {
        write!(html, "<span class=\"pill\">{}</span>", escape_html(pill))?;
    }
    html.push_str("</div>\n</div>\n</div>\n<div class=\"hero-actions\">\n");

    writeln!(
        html,
        "<a class=\"btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">GitHub</a>",
        escape_html(profile.github_url)
    )?;
    match &assets.resume {
        Some(resume) => {
            writeln!(
                html,
                "<a class=\"btn\" href=\"/resume.pdf\" download=\"{}\">Download Resume</a>",
                escape_html(&resume.file_name)
            )?;
        }
        None => html.push_str(
            "<button class=\"btn\" disabled title=\"Add a resume PDF to enable download.\">Download Resume</button>\n",
        ),
    }
    html.push_str("</div>\n</section>\n");
    Ok(())
}

fn render_summary(html: &mut String, profile: &Profile) -> fmt::Result {
    writeln!(
        html,
        "<div class=\"section-header\">Summary</div>\n<div class=\"glass\">{}</div>",
        escape_html(profile.summary)
    )?;
    Ok(())
}

fn render_skills(html: &mut String, profile: &Profile) -> fmt::Result {
    html.push_str("<div class=\"section-header\">Skills</div>\n<div class=\"grid\">\n");
    for group in profile.skills {
        writeln!(
            html,
            "<div class=\"skill-card\"><div class=\"skill-title\">{}</div>",
            escape_html(group.group)
        )?;
        for skill in group.items {
            let pct = skill.percent();
            writeln!(
                html,
                "<div class=\"skill-row\"><div class=\"skill-label\"><span>{}</span><span>{pct}%</span></div>\
<div class=\"bar\"><div style=\"--w:{pct}%;\"></div></div></div>",
                escape_html(skill.label)
            )?;
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    Ok(())
}

fn render_experience(html: &mut String, profile: &Profile) -> fmt::Result {
    html.push_str(
        "<div class=\"section-header\">Professional Experience</div>\n<div class=\"timeline\">\n",
    );
    for exp in profile.experience {
        writeln!(
            html,
            "<div class=\"t-card\"><div class=\"t-top\"><div class=\"t-role\">{} — {}</div>\
<div class=\"t-meta\">{} • {}</div></div>\
<details><summary class=\"t-sub\">View details: {} ({})</summary><ul>",
            escape_html(exp.title),
            escape_html(exp.company),
            escape_html(exp.location),
            escape_html(exp.dates),
            escape_html(exp.company),
            escape_html(exp.dates),
        )?;
        for bullet in exp.bullets {
            writeln!(html, "<li>{}</li>", escape_html(bullet))?;
        }
        html.push_str("</ul></details></div>\n");
    }
    html.push_str("</div>\n");
    Ok(())
}

fn render_education(html: &mut String, profile: &Profile) -> fmt::Result {
    html.push_str("<div class=\"section-header\">Education</div>\n<div class=\"grid\">\n");
    for edu in profile.education {
        writeln!(
            html,
            "<div class=\"edu-card\"><div class=\"edu-degree\">{}</div>\
<div class=\"edu-school\">{} • {}<br/>{}</div><div class=\"edu-extra\">{}</div></div>",
            escape_html(edu.degree),
            escape_html(edu.school),
            escape_html(edu.location),
            escape_html(edu.dates),
            escape_html(edu.extra),
        )?;
    }
    html.push_str("</div>\n");
    Ok(())
}

fn render_coursework(html: &mut String, profile: &Profile) -> fmt::Result {
    writeln!(
        html,
        "<div class=\"section-header\">Coursework</div>\n<div class=\"glass\">{}</div>",
        escape_html(&profile.coursework.join(", "))
    )?;
    Ok(())
}

fn render_contact_dialog(html: &mut String) {
    html.push_str(
        r#"<div class="sticky-cta"><button class="btn" id="open-contact">Let’s build something awesome → Drop me your details :)</button></div>
<dialog id="contact-dialog">
<h3>Let’s get in touch 🤝</h3>
<p>Share your details and I’ll reach out.</p>
<form id="contact-form">
<label>Email *<input name="email" type="text" placeholder="name@gmail.com"/></label>
<label>Phone number *<input name="phone" type="text" placeholder="+1 469 347 5994"/></label>
<label>Message (optional)<textarea name="notes" rows="4" placeholder="Tell me what you’re looking for…"></textarea></label>
<div style="margin-top:12px;display:flex;gap:8px;">
<button class="btn" type="submit">Submit</button>
<button class="btn" type="button" id="close-contact">Close</button>
</div>
<div id="contact-status" class="form-status"></div>
</form>
</dialog>
"#,
    );
}

fn render_feedback_bar(html: &mut String) -> fmt::Result {
    let scale: Vec<_> = feedback::scale().collect();
    let scale_json = serde_json::to_string(&scale).unwrap_or_else(|_| "[]".to_string());
    let default = feedback::feedback_label(DEFAULT_RATING);
    let (emoji, caption) = default
        .map(|d| (d.emoji, d.caption()))
        .unwrap_or_default();

    writeln!(
        html,
        "<div class=\"feedback-bar\"><div class=\"feedback-inner\">\
<label for=\"feedback-rating\">Feedback (1 = Sad, 5 = Happy)</label>\
<input id=\"feedback-rating\" type=\"range\" min=\"{MIN_RATING}\" max=\"{MAX_RATING}\" step=\"1\" value=\"{DEFAULT_RATING}\" data-scale=\"{}\"/>\
<div id=\"feedback-emoji\" class=\"feedback-emoji\">{emoji}</div>\
<div id=\"feedback-caption\">{}</div></div></div>",
        escape_html(&scale_json),
        escape_html(&caption),
    )?;
    Ok(())
}
