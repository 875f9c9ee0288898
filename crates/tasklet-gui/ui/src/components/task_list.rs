use tasklet_core::config::Features;
use tasklet_core::list::{
  ListEntry,
  list_entries
};
use tasklet_core::task::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:         Vec<Task>,
  pub features:      Features,
  pub editing:       Option<TaskId>,
  pub on_toggle:     Callback<TaskId>,
  pub on_remove:     Callback<TaskId>,
  pub on_begin_edit: Callback<TaskId>,
  pub on_rename:
    Callback<(TaskId, String)>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let visible: Vec<&Task> =
    props.tasks.iter().collect();

  html! {
      <ul class="task-list">
          {
              for list_entries(&visible).map(|entry| match entry {
                  | ListEntry::Row { key, task } => html! {
                      <TaskListRow
                          key={key}
                          task={task.clone()}
                          features={props.features}
                          under_cursor={props.editing.as_ref() == Some(&task.id)}
                          on_toggle={props.on_toggle.clone()}
                          on_remove={props.on_remove.clone()}
                          on_begin_edit={props.on_begin_edit.clone()}
                          on_rename={props.on_rename.clone()}
                      />
                  },
                  | ListEntry::Placeholder => html! {
                      <li class="empty">{ "No tasks found!" }</li>
                  }
              })
          }
      </ul>
  }
}
