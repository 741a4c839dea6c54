/// Confetti burst on the overlay canvas, fire-and-forget.
///
/// The animation owns the canvas with id `confetti-canvas` and cleans
/// itself up after ~1.8s; the core never hears back from it.
pub(super) fn confetti_script() -> String {
    r#"(function() {
        const canvas = document.getElementById("confetti-canvas");
        if (!canvas || !canvas.getContext) { return; }
        const ctx = canvas.getContext("2d");
        canvas.width = window.innerWidth;
        canvas.height = window.innerHeight;
        const palette = ["#8bd26f", "#f6e05e", "#34d399", "#60a5fa", "#a78bfa", "#f472b6"];
        let pieces = [];
        for (let i = 0; i < 70; i++) {
            pieces.push({
                x: window.innerWidth / 2 + (Math.random() * 500 - 250),
                y: window.innerHeight / 2 - 80 + (Math.random() * 40 - 20),
                vx: (Math.random() - 0.5) * 6,
                vy: Math.random() * -6 - 2,
                size: Math.random() * 8 + 4,
                rot: Math.random() * 360,
                color: palette[Math.floor(Math.random() * palette.length)],
            });
        }
        const draw = () => {
            ctx.clearRect(0, 0, canvas.width, canvas.height);
            if (pieces.length === 0) { return; }
            pieces.forEach((p, idx) => {
                p.x += p.vx;
                p.y += (p.vy += 0.18);
                p.rot += p.vx * 4;
                ctx.save();
                ctx.translate(p.x, p.y);
                ctx.rotate(p.rot * Math.PI / 180);
                ctx.fillStyle = p.color;
                ctx.fillRect(-p.size / 2, -p.size / 2, p.size, p.size * 0.6);
                ctx.restore();
                if (p.y > window.innerHeight + 60) { pieces.splice(idx, 1); }
            });
            if (pieces.length > 0) { requestAnimationFrame(draw); }
        };
        requestAnimationFrame(draw);
        setTimeout(() => { pieces = []; }, 1800);
    })();"#
        .to_owned()
}
