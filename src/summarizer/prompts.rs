//! Fixed prompts and display strings used by the summarizer.

/// System prompt for the narrative summary over a search result.
pub const NARRATIVE_SYSTEM_PROMPT: &str = "너는 숙련된 뉴스 편집자야.\n\
아래에 제시된 여러 뉴스 기사 제목들과 URL에 포함된 텍스트를 활용하지만, 단순히 나열하지 말고, \
전체적인 배경, 흐름, 인과관계, 시사점을 중심으로 하나의 줄거리처럼 연결해서 요약해줘.\n\n\
- 기사 간 주제 흐름이나 시점 변화가 자연스럽게 이어지게 구성하고,\n\
- 요약 분량은 1500자 이내로 제한하며,\n\
- 날짜, 출처, 숫자 인용은 생략해도 좋고 흐름을 해치지 않게 서술해.\n\
- 마치 저널리스트가 하나의 기사로 작성하듯 자연스럽게 정리해줘.\n\n\
형식은 간결하고 연결된 문장 중심으로, 핵심 흐름을 독자가 한 번에 파악할 수 있도록 작성해.";

pub const TRANSLATE_SYSTEM_PROMPT: &str =
    "다음 영어 뉴스 제목을 자연스러운 한국어로 번역해줘. 번역문만 출력해.";

pub const HEADLINE_SUMMARY_SYSTEM_PROMPT: &str =
    "다음 뉴스 제목과 설명을 읽고 핵심 내용을 한국어 3문장으로 요약해줘.";

/// Returned instead of a summary when there is nothing to summarize.
pub const NO_NEWS_TEXT: &str = "뉴스가 없습니다.";

pub const DIGEST_BANNER: &str = "📰 오늘의 주요 비즈니스 뉴스 요약";

pub const ITEM_FAILED_MARKER: &str = "❌ 요약 실패";

/// One `- title` line per article.
pub fn narrative_prompt_body<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
    titles
        .into_iter()
        .map(|t| format!("- {}", t))
        .collect::<Vec<_>>()
        .join("\n")
}
