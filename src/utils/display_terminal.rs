//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정(저장소 연결, 인덱스 확인, 서비스 구성)을 터미널에 보기 좋게 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               University Admin API               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 시작 단계를 출력합니다 (`→ Step 1: ...`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 단계 하위 작업과 결과를 출력합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 구성된 서비스 그래프 요약을 출력합니다
pub fn print_registry_summary(backend: &str, collections: &[&str], services: &[&str]) {
    println!();
    print_boxed_title("🎓 SERVICE REGISTRY READY");
    println!("   💾 Storage: {}", backend);
    println!("   📦 Collections: {}", collections.join(", "));
    println!("   🔧 Services: {}", services.join(", "));
    println!();
}
