// A tiny task list, just enough for a real `cargo test` run.
// 一个很小的任务列表，足以进行一次真实的 `cargo test` 运行。

#[cfg(feature = "feature_build_fail")]
fn this_will_fail_to_compile() {
    non_existent_function();
}

pub struct Task {
    pub title: String,
    pub done: bool,
}

pub fn rename(task: &mut Task, title: &str) {
    task.title = title.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_can_be_renamed() {
        let mut task = Task { title: "old".into(), done: false };
        rename(&mut task, "new");
        assert_eq!(task.title, "new");
    }

    #[test]
    fn new_task_is_not_done() {
        let task = Task { title: "t".into(), done: false };
        assert!(!task.done);
    }

    // Only compiled with `feature_test_fail`; always panics.
    #[test]
    #[cfg(feature = "feature_test_fail")]
    fn test_that_fails() {
        panic!("This test is designed to fail.");
    }
}
