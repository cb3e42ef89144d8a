use tracing::debug;

use crate::events::PipelineEvent;
use crate::status::PipelineStatus;

/// Renders a finished pipeline.
///
/// ```markdown
/// 仓库team/pay的release/v2.6分支部署成功🎉
/// > <font color="info">修复了XXX问题</font>
/// > <font color="comment">zhangsan@example.com</font>
/// > 点击进入 [git提交详情页面](url)
/// > 点击进入 [ci构建详情页面](url)
/// ```
///
/// Returns `None` unless the status is `success` or `failed`.
pub fn render_pipeline(ev: &PipelineEvent) -> Option<String> {
    let attrs = &ev.object_attributes;
    let Some(status) = PipelineStatus::lookup(&attrs.status) else {
        debug!(status = %attrs.status, id = attrs.id, "pipeline status not announced");
        return None;
    };

    Some(format!(
        "仓库{project}的{git_ref}分支部署{text}\n\
         > <font color=\"{color}\">{message}</font>\n\
         > <font color=\"comment\">{email}</font>\n\
         > 点击进入 [git提交详情页面]({commit_url})\n\
         > 点击进入 [ci构建详情页面]({pipeline_url})",
        project = ev.project.name,
        git_ref = attrs.git_ref,
        text = status.text,
        color = status.color,
        message = ev.commit.message,
        email = ev.commit.author.email,
        commit_url = ev.commit.url,
        pipeline_url = ev.pipeline_url(),
    ))
}
