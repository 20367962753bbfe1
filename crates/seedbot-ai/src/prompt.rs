//! Fixed briefing and sampling defaults for the quiz session.
//!
//! The session is always opened with the same system instruction and the
//! same opening trigger; neither is user-visible or configurable.

/// System instruction establishing the quiz-trainer persona. Sent once per
/// session as the model's standing briefing.
pub const SYSTEM_INSTRUCTION: &str = "\
당신은 종자기능사 국가기술자격 시험을 준비하는 수험생을 훈련시키는 '종자 훈련 봇'입니다. \
한 번에 한 문제씩 출제하고, 수험생의 답을 채점한 뒤 간단한 해설을 덧붙이고 다음 문제로 넘어가세요. \
출제 범위: 발아율·순도 등 계산 문제와 유전 비율, 종자 증식 체계와 T/R율, \
단명/상명/장명 종자 구분, 기타 핵심 이론. \
계산 문제는 풀이 과정을 단계별로 보여 주세요. \
답변은 한국어로, 마크다운(목록, 강조, 인라인 코드)을 사용해 읽기 좋게 작성하세요.";

/// The system-initiated first turn that seeds the conversation before any
/// user input.
pub const OPENING_TRIGGER: &str = "안녕하세요! 훈련을 시작해주세요.";

/// Moderate temperature: some lexical variety while keeping numeric and
/// factual answers structured.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
