use std::f64::consts::PI;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

pub const RING_RADIUS: f64 = 130.0;
pub const PASS_COLOR: &str = "#6dd6ff";
pub const FAIL_COLOR: &str = "#b26dff";

pub fn circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Score badge: a progress ring around the rounded percentage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Badge {
    pub pct: u8,
    pub passed: bool,
    pub dash_offset: f64,
    pub svg: String,
}

impl Badge {
    /// Inline `data:` URI so the result view needs no extra fetch.
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", BASE64.encode(&self.svg))
    }
}

pub struct BadgeService;

impl BadgeService {
    pub fn render(percentage: f64, passed: bool) -> Badge {
        let pct = percentage.clamp(0.0, 100.0).round_ties_even() as u8;
        let ring = if passed { PASS_COLOR } else { FAIL_COLOR };
        let title = if passed { "PASSED" } else { "TRY AGAIN" };
        let circ = circumference();
        let dash_offset = (1.0 - f64::from(pct) / 100.0) * circ;

        let svg = format!(
            r##"<svg xmlns='http://www.w3.org/2000/svg' width='320' height='320' viewBox='0 0 320 320'>
  <defs>
    <linearGradient id='g' x1='0' x2='1'>
      <stop offset='0%' stop-color='{ring}'/>
      <stop offset='100%' stop-color='#ffffff'/>
    </linearGradient>
  </defs>
  <rect width='100%' height='100%' fill='#0b1220'/>
  <circle cx='160' cy='160' r='{radius}' fill='none' stroke='#1e2a49' stroke-width='16'/>
  <circle cx='160' cy='160' r='{radius}' fill='none' stroke='url(#g)' stroke-width='18' stroke-linecap='round'
    stroke-dasharray='{circ}' stroke-dashoffset='{dash_offset}' transform='rotate(-90 160 160)'/>
  <text x='160' y='150' fill='#e6eefc' font-size='72' font-family='Inter, Arial' text-anchor='middle' font-weight='700'>{pct}%</text>
  <text x='160' y='195' fill='#9fb3d1' font-size='18' font-family='Inter, Arial' text-anchor='middle'>Score</text>
  <rect x='90' y='215' rx='14' ry='14' width='140' height='36' fill='#151f38' stroke='#263357'/>
  <text x='160' y='240' fill='#e6eefc' font-size='16' font-family='Inter, Arial' text-anchor='middle' font-weight='700'>{title}</text>
</svg>"##,
            radius = RING_RADIUS,
        );

        Badge {
            pct,
            passed,
            dash_offset,
            svg,
        }
    }
}
