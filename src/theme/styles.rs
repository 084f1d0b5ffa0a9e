//! Global CSS styles for the birthday trip page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PEARL BLUE */
  --pearl-blue: #005CA8;
  --pearl-glow: rgba(0, 92, 168, 0.5);
  --light-blue: #E6F0FA;
  --soft-blue: #EFF6FF;
  --border-blue: #DBEAFE;

  /* BACKGROUNDS */
  --page-bg: #F8FAFC;
  --card-bg: #FFFFFF;

  /* TEXT */
  --text-primary: #1F2937;
  --text-secondary: #4B5563;
  --text-muted: #9CA3AF;

  /* SEMANTIC */
  --heart: #FCA5A5;
  --error: #DC2626;

  --font-sans: -apple-system, 'PingFang TC', 'Noto Sans TC', 'Microsoft JhengHei', sans-serif;

  --radius-card: 1.5rem;
  --shadow-card: 0 1px 3px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-slow: 1s ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.page {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

/* === Background Diamonds === */
.diamond-marker {
  position: absolute;
  animation-name: drift;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes drift {
  0%, 100% { translate: 0 0; opacity: 0.6; }
  50% { translate: 0 -12px; opacity: 1; }
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--pearl-blue);
  color: #fff;
  border: none;
  border-radius: 9999px;
  padding: 0.6rem 1.5rem;
  font-size: 1rem;
  cursor: pointer;
  box-shadow: 0 4px 12px rgba(0, 92, 168, 0.3);
  transition: transform var(--transition-fast);
}

.btn-primary:hover { transform: scale(1.05); }

.btn-primary.btn-large {
  padding: 0.75rem 2rem;
  font-size: 1.125rem;
}

.btn-hint {
  background: transparent;
  color: var(--pearl-blue);
  border: 1px solid var(--pearl-blue);
  border-radius: 9999px;
  padding: 0.6rem 1.25rem;
  cursor: pointer;
}

.btn-hint:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-muted {
  background: #F3F4F6;
  color: var(--text-muted);
  border: none;
  border-radius: 9999px;
  padding: 0.5rem 1rem;
  font-size: 0.75rem;
  cursor: default;
}

/* === Intro Overlay === */
.intro-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: #fff;
}

.intro-diamond {
  position: relative;
  margin-bottom: 2rem;
}

.intro-diamond-outer {
  width: 6rem;
  height: 6rem;
  background: var(--border-blue);
  transform: rotate(45deg);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 0 20px var(--pearl-glow);
  animation: pulse 2s ease-in-out infinite;
}

.intro-diamond-inner {
  width: 4rem;
  height: 4rem;
  background: var(--pearl-blue);
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
}

.intro-sparkle {
  transform: rotate(-45deg);
  animation: spin-slow 6s linear infinite;
}

.intro-ping {
  position: absolute;
  top: -1rem;
  left: -1rem;
  width: 8rem;
  height: 8rem;
  border: 2px solid var(--border-blue);
  transform: rotate(45deg);
  animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.intro-greeting {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--pearl-blue);
  letter-spacing: 0.1em;
  margin-bottom: 1rem;
  animation: bounce 1s infinite;
}

.intro-guest {
  font-size: 1.5rem;
  font-weight: 300;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.intro-tagline {
  margin-top: 2rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

@keyframes ping {
  75%, 100% { transform: rotate(45deg) scale(1.6); opacity: 0; }
}

@keyframes spin-slow {
  from { transform: rotate(-45deg); }
  to { transform: rotate(315deg); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-10%); }
  50% { transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Guess Game === */
.game-overlay {
  position: fixed;
  inset: 0;
  z-index: 45;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(248, 250, 252, 0.95);
  padding: 1.5rem;
}

.game-card {
  width: 100%;
  max-width: 24rem;
  background: var(--card-bg);
  border-radius: var(--radius-card);
  box-shadow: 0 10px 30px rgba(0, 92, 168, 0.15);
  padding: 1.5rem;
  text-align: center;
}

.game-portrait {
  width: 6rem;
  height: 6rem;
  border-radius: 50%;
  border: 3px solid var(--light-blue);
  object-fit: cover;
  margin-bottom: 1rem;
}

.game-title {
  font-size: 1.25rem;
  color: var(--pearl-blue);
  margin-bottom: 1rem;
}

.hint-list {
  list-style: none;
  text-align: left;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.hint {
  display: grid;
  grid-template-columns: 1.5rem 1fr;
  gap: 0.25rem 0.5rem;
  animation: fade-in 0.4s ease;
}

.hint-level {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
  background: var(--light-blue);
  color: var(--pearl-blue);
  font-size: 0.75rem;
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}

.hint-text {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.hint-image {
  grid-column: 2;
  width: 100%;
  border-radius: 0.75rem;
}

.guess-field { margin-bottom: 1rem; }

.guess-input {
  width: 100%;
  padding: 0.6rem 1rem;
  border: 1px solid var(--border-blue);
  border-radius: 9999px;
  font-size: 1rem;
  text-align: center;
  outline: none;
}

.guess-input:focus { border-color: var(--pearl-blue); }
.guess-input.has-error { border-color: var(--error); }

.guess-error {
  margin-top: 0.5rem;
  font-size: 0.8rem;
  color: var(--error);
}

.game-actions {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-card);
  border-bottom: 1px solid var(--border-blue);
}

.nav-top {
  max-width: 28rem;
  margin: 0 auto;
  padding: 0.75rem 1rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-title {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--pearl-blue);
}

.nav-diamond {
  width: 0.75rem;
  height: 0.75rem;
  background: var(--pearl-blue);
  transform: rotate(45deg);
}

.nav-dates {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.tab-bar {
  max-width: 28rem;
  margin: 0 auto;
  padding-bottom: 0.5rem;
  display: flex;
  justify-content: space-around;
}

.tab {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.75rem;
  background: transparent;
  color: var(--text-muted);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.tab:hover { color: var(--text-secondary); }

.tab.selected {
  background: var(--soft-blue);
  color: var(--pearl-blue);
  transform: scale(1.05);
}

.tab-label {
  font-size: 0.75rem;
  font-weight: 500;
}

/* === Content === */
.content {
  position: relative;
  max-width: 28rem;
  margin: 0 auto;
  padding: 1.5rem 1rem 6rem;
}

.panel { animation: fade-in 0.4s ease; }

.panel-heading {
  text-align: center;
  margin-bottom: 1.5rem;
}

.panel-heading h3 {
  font-size: 1.25rem;
  color: var(--pearl-blue);
}

.panel-heading p {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Itinerary === */
.day {
  position: relative;
  margin-bottom: 3rem;
}

.day-line {
  position: absolute;
  top: 0;
  left: 1rem;
  height: 100%;
  width: 2px;
  background: var(--border-blue);
}

.day-header {
  position: relative;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.day-badge {
  z-index: 1;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--light-blue);
  color: #2563EB;
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}

.day-heading {
  font-size: 1.25rem;
  font-weight: 700;
}

.timeline-item {
  position: relative;
  padding-left: 3rem;
  margin-bottom: 1.5rem;
}

.timeline-bullet {
  position: absolute;
  left: 11px;
  top: 0.25rem;
  z-index: 1;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 2px;
  border: 2px solid #93C5FD;
  background: #fff;
  transform: rotate(45deg);
  transition: transform var(--transition-fast);
}

.timeline-item:hover .timeline-bullet { transform: rotate(45deg) scale(1.25); }

.timeline-bullet.highlight {
  background: var(--pearl-blue);
  border-color: var(--pearl-blue);
}

.timeline-card {
  padding: 1rem;
  border-radius: 1rem;
  background: var(--card-bg);
  border: 1px solid #F3F4F6;
  box-shadow: var(--shadow-card);
}

.timeline-card.highlight {
  background: var(--soft-blue);
  border-color: #BFDBFE;
}

.timeline-meta {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 0.5rem;
}

.timeline-time {
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--pearl-blue);
  background: rgba(219, 234, 254, 0.5);
  padding: 0.1rem 0.5rem;
  border-radius: 0.375rem;
}

.timeline-icon { color: var(--text-muted); }

.timeline-title {
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.timeline-title.highlight { color: #1E40AF; }

.timeline-content {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Food === */
.food-category {
  background: var(--card-bg);
  border-radius: var(--radius-card);
  padding: 1.25rem;
  box-shadow: var(--shadow-card);
  border: 1px solid #F3F4F6;
  margin-bottom: 1.5rem;
}

.food-category-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--pearl-blue);
  font-weight: 700;
  border-bottom: 1px solid #F3F4F6;
  padding-bottom: 0.5rem;
  margin-bottom: 1rem;
}

.food-items {
  display: grid;
  gap: 0.75rem;
}

.food-item {
  border-left: 2px solid var(--border-blue);
  padding: 0.25rem 0 0.25rem 0.75rem;
  transition: border-color var(--transition-fast);
}

.food-item:hover { border-color: var(--pearl-blue); }

.food-item-head {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.25rem;
}

.food-name { font-weight: 700; }

.food-tag {
  font-size: 10px;
  background: var(--soft-blue);
  color: #2563EB;
  padding: 0.1rem 0.4rem;
  border-radius: 0.25rem;
}

.food-desc {
  font-size: 0.75rem;
  color: #6B7280;
}

/* === Hotel === */
.hotel-card {
  background: var(--card-bg);
  border-radius: var(--radius-card);
  overflow: hidden;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
  margin-bottom: 1.5rem;
}

.hotel-photo {
  position: relative;
  height: 10rem;
  background: #E5E7EB;
}

.hotel-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hotel-badge {
  position: absolute;
  top: 1rem;
  right: 1rem;
  background: rgba(255, 255, 255, 0.9);
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--pearl-blue);
}

.hotel-body { padding: 1.5rem; }

.hotel-name {
  font-size: 1.5rem;
  font-weight: 700;
}

.hotel-english {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.hotel-features {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.hotel-feature {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.hotel-feature-icon {
  background: var(--soft-blue);
  color: var(--pearl-blue);
  padding: 0.375rem;
  border-radius: 0.5rem;
}

.hotel-feature-title {
  font-size: 0.875rem;
  font-weight: 700;
}

.hotel-feature-desc {
  font-size: 0.75rem;
  color: #6B7280;
}

.hotel-note {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  background: var(--light-blue);
  padding: 1.25rem;
  border-radius: 1rem;
}

.hotel-note-icon {
  margin-top: 0.25rem;
  color: var(--pearl-blue);
}

.hotel-note h4 {
  color: var(--pearl-blue);
  margin-bottom: 0.25rem;
}

.hotel-note p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Notice === */
.notice-card {
  position: relative;
  overflow: hidden;
  background: var(--pearl-blue);
  color: #fff;
  padding: 1.5rem;
  border-radius: var(--radius-card);
  box-shadow: 0 10px 25px rgba(0, 92, 168, 0.25);
  margin-bottom: 1rem;
}

.notice-watermark {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  opacity: 0.2;
  transform: rotate(12deg);
}

.notice-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.25rem;
  margin-bottom: 1rem;
}

.notice-items {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.notice-item {
  display: flex;
  gap: 0.75rem;
}

.notice-num {
  flex-shrink: 0;
  width: 1.5rem;
  height: 1.5rem;
  margin-top: 0.125rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.2);
  font-size: 0.75rem;
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}

.notice-title {
  font-size: 0.875rem;
  margin-bottom: 0.25rem;
}

.notice-desc {
  font-size: 0.75rem;
  color: #DBEAFE;
}

.dress-code {
  background: var(--card-bg);
  padding: 1.5rem;
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-card);
  border: 1px solid var(--border-blue);
}

.dress-code-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.125rem;
  color: var(--pearl-blue);
  margin-bottom: 1rem;
}

.dress-code-diamond {
  width: 0.5rem;
  height: 0.5rem;
  background: var(--pearl-blue);
  transform: rotate(45deg);
}

.dress-code-body {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.dress-code-text { flex: 1; }

.dress-code-lead {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.dress-code-color {
  font-weight: 700;
  color: var(--pearl-blue);
}

.dress-code-advice {
  margin-top: 0.5rem;
  font-size: 0.75rem;
  color: #6B7280;
}

.dress-code-aside { opacity: 0; }

.dress-code-swatch {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  background: var(--soft-blue);
  border: 2px solid var(--border-blue);
  transform: rotate(12deg);
  display: flex;
  align-items: center;
  justify-content: center;
}

.dress-code-swatch-inner {
  width: 2rem;
  height: 2rem;
  background: var(--pearl-blue);
  transform: rotate(45deg);
}

.countdown {
  text-align: center;
  padding: 2rem 0;
}

/* === Footer === */
.footer {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 0.5rem;
  text-align: center;
  font-size: 0.75rem;
  color: #D1D5DB;
  background: rgba(255, 255, 255, 0.5);
  backdrop-filter: blur(4px);
  pointer-events: none;
}

.footer-heart {
  display: inline;
  color: var(--heart);
  vertical-align: middle;
}
"#;
