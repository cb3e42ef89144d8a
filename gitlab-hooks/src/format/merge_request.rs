use tracing::debug;

use crate::events::MergeRequestEvent;

/// Shown when the merge request has no description.
const EMPTY_DESCRIPTION: &str = "无";

/// Renders an opened or merged merge request.
///
/// ```markdown
/// ### [group/ios](url) 有新的合并请求 [!12](url)
/// > 标题: 微信登录
/// > 描述: 无
/// > 提交: 张三(zhangsan)
/// > 审核: 林国锋(linguofeng)
/// > 操作: [[查看](url)]
/// ```
///
/// Other actions (`update`, `close`, `approved`, ...) yield `None`.
pub fn render_merge_request(ev: &MergeRequestEvent) -> Option<String> {
    let attrs = &ev.object_attributes;
    match attrs.action.as_str() {
        "open" => Some(render_opened(ev)),
        "merge" => Some(format!(
            "### [{project}]({project_url}) 合并请求 [!{iid}]({url}) 已合并\n\
             > 合并: {merger}\n\
             > 操作: [[查看]({url})]",
            project = ev.project.name,
            project_url = ev.project.url,
            iid = attrs.iid,
            url = attrs.url,
            merger = ev.user.display(),
        )),
        other => {
            debug!(action = other, iid = attrs.iid, "merge request action not announced");
            None
        }
    }
}

fn render_opened(ev: &MergeRequestEvent) -> String {
    let attrs = &ev.object_attributes;
    let description = if attrs.description.is_empty() {
        EMPTY_DESCRIPTION
    } else {
        attrs.description.as_str()
    };
    let reviewers = ev
        .reviewers
        .iter()
        .map(|r| r.display())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "### [{project}]({project_url}) 有新的合并请求 [!{iid}]({url})\n\
         > 标题: {title}\n\
         > 描述: {description}\n\
         > 提交: {author}\n\
         > 审核: {reviewers}\n\
         > 操作: [[查看]({url})]",
        project = ev.project.name,
        project_url = ev.project.url,
        iid = attrs.iid,
        url = attrs.url,
        title = attrs.title,
        author = ev.user.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::User;

    fn user(name: &str, username: &str) -> User {
        User {
            name: name.into(),
            username: username.into(),
        }
    }

    fn opened() -> MergeRequestEvent {
        let mut ev = MergeRequestEvent::default();
        ev.user = user("张三", "zhangsan");
        ev.project.name = "candyabc/ios".into();
        ev.project.url = "https://git.example.com/candyabc/ios".into();
        ev.object_attributes.action = "open".into();
        ev.object_attributes.iid = 12;
        ev.object_attributes.url = "https://git.example.com/candyabc/ios/-/merge_requests/12".into();
        ev.object_attributes.title = "微信登录".into();
        ev
    }

    #[test]
    fn opened_full_layout() {
        let mut ev = opened();
        ev.object_attributes.description = "接入微信 SDK".into();
        ev.reviewers = vec![user("林国锋", "lgf")];

        let url = "https://git.example.com/candyabc/ios/-/merge_requests/12";
        let expected = format!(
            "### [candyabc/ios](https://git.example.com/candyabc/ios) 有新的合并请求 [!12]({url})\n\
             > 标题: 微信登录\n\
             > 描述: 接入微信 SDK\n\
             > 提交: 张三(zhangsan)\n\
             > 审核: 林国锋(lgf)\n\
             > 操作: [[查看]({url})]"
        );
        assert_eq!(render_merge_request(&ev).unwrap(), expected);
    }

    #[test]
    fn opened_empty_description_uses_placeholder() {
        let content = render_merge_request(&opened()).unwrap();
        assert!(content.contains("> 描述: 无\n"));
    }

    #[test]
    fn reviewers_joined_in_order() {
        let mut ev = opened();
        ev.reviewers = vec![user("B", "b"), user("C", "c"), user("D", "d")];
        let content = render_merge_request(&ev).unwrap();
        assert!(content.contains("> 审核: B(b) C(c) D(d)\n"));
    }

    #[test]
    fn no_reviewers_leaves_line_empty() {
        let content = render_merge_request(&opened()).unwrap();
        assert!(content.contains("> 审核: \n"));
    }

    #[test]
    fn merged_layout() {
        let body = br#"{"object_attributes":{"action":"merge","iid":42,"url":"http://x/42"},"user":{"name":"A","username":"a"},"project":{"path_with_namespace":"g/p","web_url":"http://x"}}"#;
        let ev = MergeRequestEvent::from_slice(body).unwrap();
        assert_eq!(
            render_merge_request(&ev).unwrap(),
            "### [g/p](http://x) 合并请求 [!42](http://x/42) 已合并\n\
             > 合并: A(a)\n\
             > 操作: [[查看](http://x/42)]"
        );
    }

    #[test]
    fn other_actions_are_silent() {
        for action in ["update", "close", "reopen", "approved", ""] {
            let mut ev = opened();
            ev.object_attributes.action = action.into();
            assert!(render_merge_request(&ev).is_none(), "{action}");
        }
    }
}
