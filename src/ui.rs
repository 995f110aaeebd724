use crate::models::OverviewResponse;

pub fn render_index(overview: &OverviewResponse) -> String {
    let active_goals = overview.stats.goals.total - overview.stats.goals.completed;
    INDEX_HTML
        .replace("{{DATE}}", &overview.date)
        .replace("{{GOALS}}", &active_goals.to_string())
        .replace("{{NOTES}}", &overview.stats.notes.total.to_string())
        .replace("{{HABITS}}", &overview.stats.habits.total.to_string())
        .replace("{{PROGRESS}}", &overview.progress_percent.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Growth Space</title>
  <style>
    :root {
      --bg: #fff8f1;
      --ink: #2b2a28;
      --muted: #7a746c;
      --accent: #ff8c42;
      --card: #ffffff;
      --line: #f0e2d3;
      --l0: #f3ece4;
      --l1: #ffd8b8;
      --l2: #ffaa6b;
      --l3: #ff7a1a;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      background: var(--bg);
      color: var(--ink);
    }

    nav {
      display: flex;
      gap: 8px;
      padding: 16px 24px;
      border-bottom: 1px solid var(--line);
      background: var(--card);
    }

    nav button, .btn {
      border: 1px solid var(--line);
      background: var(--card);
      border-radius: 999px;
      padding: 6px 14px;
      cursor: pointer;
      font: inherit;
    }

    nav button.active, .btn.primary {
      background: var(--accent);
      border-color: var(--accent);
      color: #fff;
    }

    main { max-width: 920px; margin: 0 auto; padding: 24px; }
    section { display: none; }
    section.active { display: block; }

    .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; }
    .stat, .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 14px;
    }
    .stat strong { display: block; font-size: 28px; }
    .stat span, .muted { color: var(--muted); font-size: 13px; }

    .list { display: grid; gap: 10px; margin-top: 14px; }
    .row { display: flex; gap: 8px; align-items: center; flex-wrap: wrap; }
    .row input, .row select, .row textarea {
      padding: 6px 10px;
      border: 1px solid var(--line);
      border-radius: 8px;
      font: inherit;
    }
    .tag { background: var(--l0); border-radius: 999px; padding: 2px 10px; font-size: 12px; cursor: pointer; }
    .tag.active { background: var(--accent); color: #fff; }

    .heatmap { display: grid; grid-template-columns: repeat(7, 28px); gap: 4px; margin-top: 12px; }
    .day { width: 28px; height: 28px; border-radius: 6px; background: var(--l0); }
    .day.level-1 { background: var(--l1); }
    .day.level-2 { background: var(--l2); }
    .day.level-3 { background: var(--l3); }
    .day.today { outline: 2px solid var(--ink); }

    #status { min-height: 20px; margin-top: 12px; }
    #status.error { color: #c0392b; }
  </style>
</head>
<body>
  <nav>
    <button data-section="home" class="active">Home</button>
    <button data-section="goals">Goals</button>
    <button data-section="notes">Notes</button>
    <button data-section="habits">Habits</button>
    <button data-section="data">Data</button>
  </nav>
  <main>
    <section id="home" class="active">
      <p class="muted">{{DATE}}</p>
      <div class="stats">
        <div class="stat"><strong id="stat-goals">{{GOALS}}</strong><span>active goals</span></div>
        <div class="stat"><strong id="stat-notes">{{NOTES}}</strong><span>notes</span></div>
        <div class="stat"><strong id="stat-habits">{{HABITS}}</strong><span>habits</span></div>
        <div class="stat"><strong id="stat-progress">{{PROGRESS}}%</strong><span>goals completed</span></div>
      </div>
      <div id="home-habits" class="list"></div>
    </section>

    <section id="goals">
      <form id="goal-form" class="row">
        <input name="title" placeholder="Goal" required />
        <select name="category">
          <option value="study">Study</option>
          <option value="work">Work</option>
          <option value="health">Health</option>
          <option value="life">Life</option>
          <option value="other">Other</option>
        </select>
        <select name="priority">
          <option value="low">Low</option>
          <option value="medium" selected>Medium</option>
          <option value="high">High</option>
        </select>
        <select name="status">
          <option value="pending" selected>Pending</option>
          <option value="in-progress">In progress</option>
          <option value="completed">Completed</option>
        </select>
        <input name="description" placeholder="Description" />
        <button class="btn primary">Add</button>
      </form>
      <div class="row" id="goal-filters" style="margin-top: 12px;">
        <span class="tag active" data-status="all">All</span>
        <span class="tag" data-status="pending">Pending</span>
        <span class="tag" data-status="in-progress">In progress</span>
        <span class="tag" data-status="completed">Completed</span>
      </div>
      <div id="goal-list" class="list"></div>
    </section>

    <section id="notes">
      <form id="note-form" class="row">
        <input name="title" placeholder="Title" required />
        <input name="tags" placeholder="tags, comma separated" />
        <textarea name="content" placeholder="Content" rows="2"></textarea>
        <button class="btn primary">Add</button>
      </form>
      <div class="row" style="margin-top: 12px;">
        <input id="note-search" placeholder="Search notes" />
      </div>
      <div class="row" id="note-tags" style="margin-top: 8px;"></div>
      <div id="note-list" class="list"></div>
    </section>

    <section id="habits">
      <form id="habit-form" class="row">
        <input name="title" placeholder="Habit" required />
        <input name="icon" placeholder="Icon" size="4" />
        <input name="color" type="color" value="#FF8C42" />
        <button class="btn primary">Add</button>
      </form>
      <div id="habit-list" class="list"></div>
      <div class="card" style="margin-top: 16px;">
        <div class="row">
          <button class="btn" id="prev-month">&larr;</button>
          <strong id="month-label"></strong>
          <button class="btn" id="next-month">&rarr;</button>
        </div>
        <div id="heatmap" class="heatmap"></div>
      </div>
    </section>

    <section id="data">
      <div class="row">
        <a class="btn primary" href="/api/export">Export backup</a>
        <input type="file" id="import-file" accept="application/json" />
        <button class="btn" id="clear-data">Clear all data</button>
      </div>
    </section>

    <div id="status"></div>
  </main>

  <script>
    const $ = (selector) => document.querySelector(selector);
    const view = { goalStatus: 'all', noteQuery: '', noteTag: '', year: null, month: null };

    const setStatus = (message, kind) => {
      const el = $('#status');
      el.textContent = message;
      el.className = kind || '';
    };

    const api = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const el = (tag, text, className) => {
      const node = document.createElement(tag);
      if (text !== undefined) node.textContent = text;
      if (className) node.className = className;
      return node;
    };

    const button = (label, onClick) => {
      const node = el('button', label, 'btn');
      node.addEventListener('click', () => onClick().catch((err) => setStatus(err.message, 'error')));
      return node;
    };

    const habitRow = (habit) => {
      const row = el('div', undefined, 'card row');
      row.style.borderLeft = `4px solid ${habit.color}`;
      row.append(el('span', habit.icon), el('strong', habit.title));
      row.append(el('span', `${habit.streak} day streak`, 'muted'));
      row.append(button(habit.checkedToday ? 'Undo' : 'Check in', async () => {
        await api('POST', `/api/habits/${habit.id}/check`);
        await refresh();
      }));
      return row;
    };

    const startEdit = (selector, id, values) => {
      const form = $(selector);
      Object.entries(values).forEach(([name, value]) => { form.elements[name].value = value; });
      form.dataset.editId = id;
      form.querySelector('button').textContent = 'Save';
      form.scrollIntoView({ behavior: 'smooth' });
    };

    const loadOverview = async () => {
      const overview = await api('GET', '/api/overview');
      $('#stat-goals').textContent = overview.stats.goals.total - overview.stats.goals.completed;
      $('#stat-notes').textContent = overview.stats.notes.total;
      $('#stat-habits').textContent = overview.stats.habits.total;
      $('#stat-progress').textContent = `${overview.progressPercent}%`;
      $('#home-habits').replaceChildren(...overview.habits.map(habitRow));
    };

    const loadGoals = async () => {
      const goals = await api('GET', `/api/goals?status=${encodeURIComponent(view.goalStatus)}`);
      $('#goal-list').replaceChildren(...goals.map((goal) => {
        const row = el('div', undefined, 'card row');
        row.append(el('strong', goal.title), el('span', `${goal.category} / ${goal.priority} / ${goal.status}`, 'muted'));
        if (goal.description) row.append(el('span', goal.description));
        row.append(
          button('Edit', async () => startEdit('#goal-form', goal.id, {
            title: goal.title,
            category: goal.category,
            priority: goal.priority,
            status: goal.status,
            description: goal.description
          })),
          button('Next status', async () => { await api('POST', `/api/goals/${goal.id}/toggle`); await refresh(); }),
          button('Delete', async () => {
            if (confirm('Delete this goal?')) { await api('DELETE', `/api/goals/${goal.id}`); await refresh(); }
          })
        );
        return row;
      }));
    };

    const loadNotes = async () => {
      const params = new URLSearchParams({ q: view.noteQuery, tag: view.noteTag });
      const [notes, tags] = await Promise.all([
        api('GET', `/api/notes?${params}`),
        api('GET', '/api/notes/tags')
      ]);
      $('#note-tags').replaceChildren(...['', ...tags].map((tag) => {
        const chip = el('span', tag || 'All', `tag${tag === view.noteTag ? ' active' : ''}`);
        chip.addEventListener('click', () => { view.noteTag = tag; loadNotes().catch((err) => setStatus(err.message, 'error')); });
        return chip;
      }));
      $('#note-list').replaceChildren(...notes.map((note) => {
        const card = el('div', undefined, 'card');
        card.append(el('strong', note.title), el('p', note.content));
        const row = el('div', undefined, 'row');
        note.tags.forEach((tag) => row.append(el('span', tag, 'tag')));
        row.append(button('Edit', async () => startEdit('#note-form', note.id, {
          title: note.title,
          tags: note.tags.join(', '),
          content: note.content
        })));
        row.append(button('Delete', async () => {
          if (confirm('Delete this note?')) { await api('DELETE', `/api/notes/${note.id}`); await refresh(); }
        }));
        card.append(row);
        return card;
      }));
    };

    const loadHabits = async () => {
      const habits = await api('GET', '/api/habits');
      $('#habit-list').replaceChildren(...habits.map((habit) => {
        const row = habitRow(habit);
        row.append(button('Edit', async () => startEdit('#habit-form', habit.id, {
          title: habit.title,
          icon: habit.icon,
          color: habit.color
        })));
        row.append(button('Delete', async () => {
          if (confirm('Delete this habit and its check-ins?')) { await api('DELETE', `/api/habits/${habit.id}`); await refresh(); }
        }));
        return row;
      }));
    };

    const loadHeatmap = async () => {
      const params = view.year === null ? '' : `?year=${view.year}&month=${view.month}`;
      const heatmap = await api('GET', `/api/habits/heatmap${params}`);
      view.year = heatmap.year;
      view.month = heatmap.month;
      $('#month-label').textContent = `${heatmap.year}-${String(heatmap.month + 1).padStart(2, '0')}`;
      $('#heatmap').replaceChildren(...heatmap.cells.map((cell) => {
        const day = el('div', undefined, `day level-${cell.level}${cell.isToday ? ' today' : ''}`);
        day.title = `${cell.date}: ${cell.checks} check-ins`;
        return day;
      }));
    };

    const shiftMonth = (delta) => {
      const index = view.year * 12 + view.month + delta;
      view.year = Math.floor(index / 12);
      view.month = index % 12;
      loadHeatmap().catch((err) => setStatus(err.message, 'error'));
    };

    const refresh = async () => {
      await Promise.all([loadOverview(), loadGoals(), loadNotes(), loadHabits(), loadHeatmap()]);
    };

    const submitForm = (selector, path) => {
      const form = $(selector);
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const body = Object.fromEntries(new FormData(form).entries());
        const editId = form.dataset.editId;
        const request = editId ? api('PUT', `${path}/${editId}`, body) : api('POST', path, body);
        request
          .then(() => {
            form.reset();
            delete form.dataset.editId;
            form.querySelector('button').textContent = 'Add';
            setStatus('Saved', '');
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    };

    document.querySelectorAll('nav button').forEach((btn) => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('nav button, section').forEach((node) => node.classList.remove('active'));
        btn.classList.add('active');
        $(`#${btn.dataset.section}`).classList.add('active');
      });
    });

    document.querySelectorAll('#goal-filters .tag').forEach((chip) => {
      chip.addEventListener('click', () => {
        document.querySelectorAll('#goal-filters .tag').forEach((node) => node.classList.remove('active'));
        chip.classList.add('active');
        view.goalStatus = chip.dataset.status;
        loadGoals().catch((err) => setStatus(err.message, 'error'));
      });
    });

    let searchTimer;
    $('#note-search').addEventListener('input', (event) => {
      clearTimeout(searchTimer);
      searchTimer = setTimeout(() => {
        view.noteQuery = event.target.value;
        loadNotes().catch((err) => setStatus(err.message, 'error'));
      }, 300);
    });

    $('#prev-month').addEventListener('click', () => shiftMonth(-1));
    $('#next-month').addEventListener('click', () => shiftMonth(1));

    $('#import-file').addEventListener('change', async (event) => {
      const file = event.target.files[0];
      event.target.value = '';
      if (!file) return;
      try {
        const payload = JSON.parse(await file.text());
        if (!confirm('Importing replaces existing data. Continue?')) return;
        await api('POST', '/api/import', payload);
        setStatus('Backup imported', '');
        await refresh();
      } catch (err) {
        setStatus(`Import failed: ${err.message}`, 'error');
      }
    });

    $('#clear-data').addEventListener('click', async () => {
      if (!confirm('Clear all data? This cannot be undone.')) return;
      try {
        await api('DELETE', '/api/data');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    submitForm('#goal-form', '/api/goals');
    submitForm('#note-form', '/api/notes');
    submitForm('#habit-form', '/api/habits');

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppData;
    use crate::overview::build_overview_at;
    use chrono::NaiveDate;

    #[test]
    fn index_fills_every_placeholder() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let html = render_index(&build_overview_at(&AppData::default(), today));
        assert!(html.contains("2026-03-10"));
        assert!(html.contains("0%"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn index_edits_through_put_routes() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let html = render_index(&build_overview_at(&AppData::default(), today));
        assert!(html.contains("api('PUT', `${path}/${editId}`, body)"));
        for form in ["#goal-form", "#note-form", "#habit-form"] {
            assert!(html.contains(&format!("startEdit('{form}'")));
        }
        assert!(html.trim_end().ends_with("</html>"));
    }
}
