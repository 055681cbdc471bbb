//! Embedded single-page UI.
//!
//! The page is static: it fetches the persona list once, swaps the portrait
//! on selection, and posts the prompt to `/api/generate`.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html><head><meta charset="utf-8"><title>MASQ - Persona Chat</title>
<style>
body{background:#1a1a2e;color:#e0e0e0;font-family:sans-serif;max-width:960px;margin:0 auto;padding:2rem}
h1{margin-bottom:0.25rem}
p.hint{color:#888;font-size:0.9rem}
.columns{display:flex;gap:2rem;align-items:flex-start}
.left{flex:1}
.right{flex:2}
select,textarea{background:#16213e;color:#e0e0e0;border:1px solid #333;padding:0.5rem;width:100%;box-sizing:border-box;font-family:inherit}
textarea{min-height:8rem}
button{background:#0f3460;color:#e0e0e0;border:none;padding:0.5rem 1.5rem;cursor:pointer;margin-top:0.75rem}
button:disabled{opacity:0.5;cursor:wait}
label{display:block;margin:0.75rem 0 0.25rem;font-size:0.9rem;color:#aaa}
#portrait{display:none;max-width:100%;max-height:240px;object-fit:contain;margin-top:1rem;border-radius:8px}
#response{background:#0a0a1a;padding:1rem;min-height:12rem;white-space:pre-wrap;border-radius:4px}
</style></head><body>
<h1>Persona Chat</h1>
<p class="hint">Select a persona and enter a prompt. The reply weaves in the persona's hidden backstory.</p>
<div class="columns">
  <div class="left">
    <label for="persona">Persona</label>
    <select id="persona"></select>
    <label for="prompt">Your prompt</label>
    <textarea id="prompt" placeholder="e.g. Give me a simple recipe for salmon."></textarea>
    <button id="submit">Get Response</button>
    <img id="portrait" alt="Persona portrait">
  </div>
  <div class="right">
    <label>Response</label>
    <div id="response"></div>
  </div>
</div>
<script>
let personas = [];
const select = document.getElementById('persona');
const portrait = document.getElementById('portrait');
const promptBox = document.getElementById('prompt');
const responseBox = document.getElementById('response');
const submit = document.getElementById('submit');

function updatePortrait() {
  const persona = personas.find(p => p.name === select.value);
  if (persona && persona.image_url) {
    portrait.src = persona.image_url;
    portrait.style.display = 'block';
  } else {
    portrait.removeAttribute('src');
    portrait.style.display = 'none';
  }
}

async function loadPersonas() {
  const res = await fetch('/api/personas');
  personas = await res.json();
  for (const persona of personas) {
    const option = document.createElement('option');
    option.value = persona.name;
    option.textContent = persona.name;
    select.appendChild(option);
  }
  updatePortrait();
}

async function generate() {
  submit.disabled = true;
  responseBox.textContent = '...';
  try {
    const res = await fetch('/api/generate', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({persona: select.value, prompt: promptBox.value}),
    });
    const data = await res.json();
    responseBox.textContent = data.response;
  } catch (err) {
    responseBox.textContent = 'Request failed: ' + err;
  } finally {
    submit.disabled = false;
  }
}

select.addEventListener('change', updatePortrait);
submit.addEventListener('click', generate);
loadPersonas();
</script>
</body></html>
"#;
